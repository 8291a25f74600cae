//! Auth API endpoints.

use crate::auth::middleware::AppState;
use crate::auth::verify::verify_wallet_signature;
use crate::db;
use crate::error::AppError;
use crate::models::{AuthRequest, AuthResponse};
use axum::{extract::State, response::IntoResponse, Json};

/// POST /api/auth/login — Wallet-based login
///
/// The frontend has the user sign a challenge message with their wallet;
/// this endpoint verifies the signature against the claimed address, looks
/// up the wallet's moderator status, and returns a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<AuthRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !verify_wallet_signature(&req.wallet_address, &req.signature, &req.message) {
        // One generic failure for every cause: bad encoding, wrong key,
        // wrong message
        tracing::warn!(action = "auth_failed", wallet = %req.wallet_address, "Invalid wallet signature");
        return Err(AppError::Unauthorized(
            "Invalid wallet signature".to_string(),
        ));
    }

    let is_moderator = db::moderators::is_moderator(&state.db, &req.wallet_address).await?;
    let token = state.tokens.issue(&req.wallet_address, is_moderator)?;

    tracing::info!(action = "auth_success", wallet = %req.wallet_address, is_moderator, "Wallet authenticated");

    Ok(Json(AuthResponse {
        token,
        wallet_address: req.wallet_address,
        is_moderator,
    }))
}
