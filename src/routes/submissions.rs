//! Submission, review, and distribution API endpoints.

use crate::auth::middleware::{AppState, AuthWallet, ModeratorWallet};
use crate::db;
use crate::error::AppError;
use crate::models::{
    DistributionRecord, ListSubmissionsParams, NewSubmission, SubmissionCreate, SubmissionResponse,
    SubmissionReview, SubmissionReviewUpdate,
};
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

/// GET /api/submissions/mine — Current wallet's submissions
pub async fn my_submissions(
    wallet: AuthWallet,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows = db::submissions::list_for_wallet(&state.db, &wallet.wallet_address).await?;
    let submissions: Vec<SubmissionResponse> = rows.into_iter().map(Into::into).collect();
    Ok(Json(submissions))
}

/// GET /api/submissions/pending — Review queue (moderators only)
pub async fn pending_submissions(
    ModeratorWallet(_wallet): ModeratorWallet,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows = db::submissions::list_pending(&state.db).await?;
    let submissions: Vec<SubmissionResponse> = rows.into_iter().map(Into::into).collect();
    Ok(Json(submissions))
}

/// GET /api/submissions/all — All submissions, optional status filter (moderators only)
pub async fn all_submissions(
    ModeratorWallet(_wallet): ModeratorWallet,
    State(state): State<AppState>,
    Query(params): Query<ListSubmissionsParams>,
) -> Result<impl IntoResponse, AppError> {
    let rows = db::submissions::list_all(&state.db, params.status.as_deref()).await?;
    let submissions: Vec<SubmissionResponse> = rows.into_iter().map(Into::into).collect();
    Ok(Json(submissions))
}

/// POST /api/submissions — Submit proof for an activity
pub async fn create_submission(
    wallet: AuthWallet,
    State(state): State<AppState>,
    Json(body): Json<SubmissionCreate>,
) -> Result<impl IntoResponse, AppError> {
    // The activity must exist and still be open for submissions
    let activity = db::activities::get(&state.db, &body.activity_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))?;
    if !activity.is_active {
        return Err(AppError::BadRequest(
            "Activity is no longer active".to_string(),
        ));
    }

    let new_submission = NewSubmission {
        activity_id: body.activity_id,
        wallet_address: wallet.wallet_address,
        proof_text: body.proof_text,
        proof_url: body.proof_url,
        status: "pending".to_string(),
    };

    let submission = db::submissions::insert(&state.db, &new_submission)
        .await?
        .ok_or_else(|| AppError::Internal("Failed to create submission".to_string()))?;

    tracing::info!(action = "submission_created", submission_id = %submission.id, wallet = %submission.wallet_address, "Proof submitted");

    Ok(Json(SubmissionResponse::from(submission)))
}

/// PATCH /api/submissions/:id/review — Approve or reject (moderators only)
pub async fn review_submission(
    ModeratorWallet(wallet): ModeratorWallet,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SubmissionReview>,
) -> Result<impl IntoResponse, AppError> {
    let existing = db::submissions::get(&state.db, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;
    if existing.status != "pending" {
        return Err(AppError::BadRequest(
            "Submission already reviewed".to_string(),
        ));
    }

    let update = SubmissionReviewUpdate {
        status: body.status.as_str().to_string(),
        reviewer_wallet: wallet.wallet_address,
        review_note: body.review_note,
        reviewed_at: chrono::Utc::now().to_rfc3339(),
    };

    let submission = db::submissions::review(&state.db, &id, &update)
        .await?
        .ok_or_else(|| AppError::Internal("Failed to update submission".to_string()))?;

    tracing::info!(action = "submission_reviewed", submission_id = %id, status = %body.status, reviewer = %submission.reviewer_wallet.as_deref().unwrap_or(""), "Submission reviewed");

    Ok(Json(SubmissionResponse::from(submission)))
}

/// POST /api/submissions/distribution — Record a token payout (moderators only)
///
/// The transfer is signed and broadcast in the moderator's wallet; the
/// frontend calls this afterwards so the payout is on record.
pub async fn record_distribution(
    ModeratorWallet(_wallet): ModeratorWallet,
    State(state): State<AppState>,
    Json(body): Json<DistributionRecord>,
) -> Result<impl IntoResponse, AppError> {
    let distribution = db::distributions::insert(&state.db, &body)
        .await?
        .ok_or_else(|| AppError::Internal("Failed to record distribution".to_string()))?;

    tracing::info!(action = "distribution_recorded", submission_id = %distribution.submission_id, tx = %distribution.tx_signature, "Distribution recorded");

    Ok(Json(distribution))
}

/// GET /api/submissions/distributions — List payouts (moderators only)
pub async fn list_distributions(
    ModeratorWallet(_wallet): ModeratorWallet,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let distributions = db::distributions::list(&state.db).await?;
    Ok(Json(distributions))
}
