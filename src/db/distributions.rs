//! `token_distributions` table pass-through.
//!
//! Distributions are recorded, never executed: the transfer is signed in
//! the moderator's wallet and only its identifier lands here.

use super::{Db, DbError};
use crate::models::{Distribution, DistributionRecord};

/// Record a completed distribution.
pub async fn insert(
    db: &Db,
    record: &DistributionRecord,
) -> Result<Option<Distribution>, DbError> {
    let rows: Vec<Distribution> = db.insert("token_distributions", record).await?;
    Ok(rows.into_iter().next())
}

/// List all recorded distributions, newest first.
pub async fn list(db: &Db) -> Result<Vec<Distribution>, DbError> {
    db.select(
        "token_distributions",
        &[("select", "*"), ("order", "created_at.desc")],
    )
    .await
}
