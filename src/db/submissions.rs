//! `submissions` table pass-through.
//!
//! List queries embed the parent activity's title and reward so the API can
//! return them flattened without a second round-trip.

use super::{Db, DbError};
use crate::models::{NewSubmission, SubmissionReviewUpdate, SubmissionRow};

const JOINED: &str = "*,activities(title,token_reward)";

/// All submissions for one wallet, newest first.
pub async fn list_for_wallet(db: &Db, wallet_address: &str) -> Result<Vec<SubmissionRow>, DbError> {
    let wallet_filter = format!("eq.{}", wallet_address);
    db.select(
        "submissions",
        &[
            ("select", JOINED),
            ("wallet_address", &wallet_filter),
            ("order", "created_at.desc"),
        ],
    )
    .await
}

/// Pending submissions, oldest first so the review queue is FIFO.
pub async fn list_pending(db: &Db) -> Result<Vec<SubmissionRow>, DbError> {
    db.select(
        "submissions",
        &[
            ("select", JOINED),
            ("status", "eq.pending"),
            ("order", "created_at.asc"),
        ],
    )
    .await
}

/// All submissions, newest first, optionally filtered by status.
pub async fn list_all(db: &Db, status: Option<&str>) -> Result<Vec<SubmissionRow>, DbError> {
    let status_filter = status.map(|s| format!("eq.{}", s));
    let mut query = vec![("select", JOINED), ("order", "created_at.desc")];
    if let Some(filter) = status_filter.as_deref() {
        query.push(("status", filter));
    }
    db.select("submissions", &query).await
}

/// Get a single submission by ID (no join).
pub async fn get(db: &Db, id: &str) -> Result<Option<SubmissionRow>, DbError> {
    let id_filter = format!("eq.{}", id);
    let rows: Vec<SubmissionRow> = db
        .select("submissions", &[("select", "*"), ("id", &id_filter)])
        .await?;
    Ok(rows.into_iter().next())
}

/// Insert a new submission row.
pub async fn insert(db: &Db, submission: &NewSubmission) -> Result<Option<SubmissionRow>, DbError> {
    let rows: Vec<SubmissionRow> = db.insert("submissions", submission).await?;
    Ok(rows.into_iter().next())
}

/// Apply a moderator's review verdict. Returns None when no row matched.
pub async fn review(
    db: &Db,
    id: &str,
    update: &SubmissionReviewUpdate,
) -> Result<Option<SubmissionRow>, DbError> {
    let id_filter = format!("eq.{}", id);
    let rows: Vec<SubmissionRow> = db
        .update("submissions", &[("id", &id_filter)], update)
        .await?;
    Ok(rows.into_iter().next())
}
