//! `moderators` roster pass-through.

use super::{Db, DbError};
use crate::models::{Moderator, ModeratorCreate};

/// Roster existence check, keyed by wallet address.
///
/// Called once at login to decide the privilege flag embedded in the session
/// token. The token then carries that answer for its whole lifetime: a
/// moderator removed mid-session keeps moderator access until expiry.
pub async fn is_moderator(db: &Db, wallet_address: &str) -> Result<bool, DbError> {
    let wallet_filter = format!("eq.{}", wallet_address);
    let rows: Vec<serde_json::Value> = db
        .select(
            "moderators",
            &[("select", "id"), ("wallet_address", &wallet_filter)],
        )
        .await?;
    Ok(!rows.is_empty())
}

/// List the full roster, newest first.
pub async fn list(db: &Db) -> Result<Vec<Moderator>, DbError> {
    db.select(
        "moderators",
        &[("select", "*"), ("order", "created_at.desc")],
    )
    .await
}

/// Add a wallet to the roster.
pub async fn insert(db: &Db, moderator: &ModeratorCreate) -> Result<Option<Moderator>, DbError> {
    let rows: Vec<Moderator> = db.insert("moderators", moderator).await?;
    Ok(rows.into_iter().next())
}

/// Remove a wallet from the roster. Returns the deleted row, or None if the
/// wallet wasn't on it.
pub async fn delete(db: &Db, wallet_address: &str) -> Result<Option<Moderator>, DbError> {
    let wallet_filter = format!("eq.{}", wallet_address);
    let rows: Vec<Moderator> = db
        .delete("moderators", &[("wallet_address", &wallet_filter)])
        .await?;
    Ok(rows.into_iter().next())
}
