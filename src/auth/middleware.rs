//! Axum extractors for the two authorization tiers.

use crate::auth::token::TokenAuthority;
use crate::config::Config;
use crate::db::Db;
use crate::error::AppError;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub tokens: Arc<TokenAuthority>,
    pub http: reqwest::Client,
    pub config: Arc<Config>,
}

/// Authenticated wallet extractor (any member).
///
/// Extracts claims from `Authorization: Bearer {token}`. Missing, malformed,
/// expired, and tampered tokens are all rejected with the same 401 before
/// any handler logic runs.
pub struct AuthWallet {
    pub wallet_address: String,
    pub is_moderator: bool,
}

impl FromRequestParts<AppState> for AuthWallet {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| AppError::Unauthorized("Invalid or expired token".to_string()))?;

        let claims = state.tokens.validate(token)?;

        Ok(AuthWallet {
            wallet_address: claims.sub,
            is_moderator: claims.is_moderator,
        })
    }
}

/// Moderator-only extractor.
///
/// A valid token without the moderator flag gets 403, distinct from the 401
/// an unauthenticated caller gets: "you are someone, but not someone with
/// this privilege".
pub struct ModeratorWallet(pub AuthWallet);

impl FromRequestParts<AppState> for ModeratorWallet {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let wallet = AuthWallet::from_request_parts(parts, state).await?;

        if !wallet.is_moderator {
            return Err(AppError::Forbidden("Moderator access required".to_string()));
        }

        Ok(ModeratorWallet(wallet))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
