//! Activity API endpoints.

use crate::auth::middleware::{AppState, ModeratorWallet};
use crate::db;
use crate::error::AppError;
use crate::models::{ActivityCreate, ActivityUpdate, ListActivitiesParams, NewActivity};
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

/// GET /api/activities — List activities (active only by default)
pub async fn list_activities(
    State(state): State<AppState>,
    Query(params): Query<ListActivitiesParams>,
) -> Result<impl IntoResponse, AppError> {
    let activities = db::activities::list(&state.db, params.active_only).await?;
    Ok(Json(activities))
}

/// GET /api/activities/:id — Get a single activity
pub async fn get_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let activity = db::activities::get(&state.db, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))?;
    Ok(Json(activity))
}

/// POST /api/activities — Create activity (moderators only)
pub async fn create_activity(
    ModeratorWallet(wallet): ModeratorWallet,
    State(state): State<AppState>,
    Json(body): Json<ActivityCreate>,
) -> Result<impl IntoResponse, AppError> {
    let new_activity = NewActivity {
        title: body.title,
        description: body.description,
        token_reward: body.token_reward,
        category: body.category,
        created_by: wallet.wallet_address,
    };

    let activity = db::activities::insert(&state.db, &new_activity)
        .await?
        .ok_or_else(|| AppError::Internal("Failed to create activity".to_string()))?;

    tracing::info!(action = "activity_created", activity_id = %activity.id, created_by = %activity.created_by, "Activity created");

    Ok(Json(activity))
}

/// PATCH /api/activities/:id — Update activity (moderators only)
pub async fn update_activity(
    ModeratorWallet(_wallet): ModeratorWallet,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ActivityUpdate>,
) -> Result<impl IntoResponse, AppError> {
    if patch.is_empty() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }

    let activity = db::activities::update(&state.db, &id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))?;

    Ok(Json(activity))
}

/// DELETE /api/activities/:id — Deactivate activity (moderators only)
///
/// Soft delete: the row stays so past submissions keep their reference.
pub async fn delete_activity(
    ModeratorWallet(_wallet): ModeratorWallet,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    db::activities::deactivate(&state.db, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))?;

    tracing::info!(action = "activity_deactivated", activity_id = %id, "Activity deactivated");

    Ok(Json(serde_json::json!({
        "message": "Activity deactivated",
        "id": id
    })))
}
