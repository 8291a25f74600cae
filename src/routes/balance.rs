//! Token balance proxy endpoint.

use crate::auth::middleware::AppState;
use crate::error::AppError;
use crate::models::BalanceResponse;
use crate::rpc;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

/// GET /api/balance/:wallet_address — SPL token balance for the club mint
///
/// Proxied through the backend so the browser never talks to the public
/// Solana RPC directly.
pub async fn get_token_balance(
    State(state): State<AppState>,
    Path(wallet_address): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let balance = rpc::token_balance(
        &state.http,
        &state.config.solana_rpc_url,
        &state.config.token_mint,
        &wallet_address,
    )
    .await
    .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(Json(BalanceResponse {
        wallet_address,
        balance,
        mint: state.config.token_mint.clone(),
    }))
}
