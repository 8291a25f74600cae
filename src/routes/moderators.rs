//! Moderator roster API endpoints.

use crate::auth::middleware::{AppState, AuthWallet, ModeratorWallet};
use crate::db;
use crate::error::AppError;
use crate::models::{ModeratorCheck, ModeratorCreate};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

/// GET /api/moderators/check — Moderator status of the current wallet
///
/// Answered from the token's claims, not the roster: the flag captured at
/// login is authoritative for the token's lifetime.
pub async fn check_moderator_status(wallet: AuthWallet) -> Json<ModeratorCheck> {
    Json(ModeratorCheck {
        is_moderator: wallet.is_moderator,
        wallet_address: wallet.wallet_address,
    })
}

/// GET /api/moderators — List the roster (moderators only)
pub async fn list_moderators(
    ModeratorWallet(_wallet): ModeratorWallet,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let moderators = db::moderators::list(&state.db).await?;
    Ok(Json(moderators))
}

/// POST /api/moderators — Add a moderator wallet (moderators only)
pub async fn add_moderator(
    ModeratorWallet(_wallet): ModeratorWallet,
    State(state): State<AppState>,
    Json(body): Json<ModeratorCreate>,
) -> Result<impl IntoResponse, AppError> {
    if db::moderators::is_moderator(&state.db, &body.wallet_address).await? {
        return Err(AppError::BadRequest(
            "Wallet is already a moderator".to_string(),
        ));
    }

    let moderator = db::moderators::insert(&state.db, &body)
        .await?
        .ok_or_else(|| AppError::Internal("Failed to add moderator".to_string()))?;

    tracing::info!(action = "moderator_added", wallet = %moderator.wallet_address, "Moderator added");

    Ok(Json(moderator))
}

/// DELETE /api/moderators/:wallet_address — Remove a moderator (moderators only)
///
/// Removal does not revoke tokens the wallet already holds; those keep
/// moderator access until they expire.
pub async fn remove_moderator(
    ModeratorWallet(wallet): ModeratorWallet,
    State(state): State<AppState>,
    Path(wallet_address): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if wallet_address == wallet.wallet_address {
        return Err(AppError::BadRequest(
            "Cannot remove yourself as moderator".to_string(),
        ));
    }

    db::moderators::delete(&state.db, &wallet_address)
        .await?
        .ok_or_else(|| AppError::NotFound("Moderator not found".to_string()))?;

    tracing::warn!(action = "moderator_removed", wallet = %wallet_address, removed_by = %wallet.wallet_address, "Moderator removed");

    Ok(Json(serde_json::json!({
        "message": "Moderator removed",
        "wallet_address": wallet_address
    })))
}
