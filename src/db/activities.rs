//! `activities` table pass-through.

use super::{Db, DbError};
use crate::models::{Activity, ActivityUpdate, NewActivity};

/// List activities, newest first, optionally restricted to active ones.
pub async fn list(db: &Db, active_only: bool) -> Result<Vec<Activity>, DbError> {
    let mut query = vec![("select", "*"), ("order", "created_at.desc")];
    if active_only {
        query.push(("is_active", "eq.true"));
    }
    db.select("activities", &query).await
}

/// Get a single activity by ID.
pub async fn get(db: &Db, id: &str) -> Result<Option<Activity>, DbError> {
    let id_filter = format!("eq.{}", id);
    let rows: Vec<Activity> = db
        .select("activities", &[("select", "*"), ("id", &id_filter)])
        .await?;
    Ok(rows.into_iter().next())
}

/// Insert a new activity row.
pub async fn insert(db: &Db, activity: &NewActivity) -> Result<Option<Activity>, DbError> {
    let rows: Vec<Activity> = db.insert("activities", activity).await?;
    Ok(rows.into_iter().next())
}

/// Apply a partial update. Returns None when no row matched.
pub async fn update(
    db: &Db,
    id: &str,
    patch: &ActivityUpdate,
) -> Result<Option<Activity>, DbError> {
    let id_filter = format!("eq.{}", id);
    let rows: Vec<Activity> = db
        .update("activities", &[("id", &id_filter)], patch)
        .await?;
    Ok(rows.into_iter().next())
}

/// Soft-delete: flip `is_active` off, keeping the row for history.
pub async fn deactivate(db: &Db, id: &str) -> Result<Option<Activity>, DbError> {
    let id_filter = format!("eq.{}", id);
    let rows: Vec<Activity> = db
        .update(
            "activities",
            &[("id", &id_filter)],
            &serde_json::json!({ "is_active": false }),
        )
        .await?;
    Ok(rows.into_iter().next())
}
