//! API route handlers.

pub mod activities;
pub mod auth;
pub mod balance;
pub mod moderators;
pub mod submissions;

use crate::auth::middleware::AppState;
use axum::{
    routing::{delete, get, patch, post},
    Json, Router,
};

/// Build the API router with all endpoints.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health))
        // Auth
        .route("/api/auth/login", post(auth::login))
        // Balance proxy
        .route("/api/balance/{wallet_address}", get(balance::get_token_balance))
        // Activities
        .route(
            "/api/activities",
            get(activities::list_activities).post(activities::create_activity),
        )
        .route(
            "/api/activities/{id}",
            get(activities::get_activity)
                .patch(activities::update_activity)
                .delete(activities::delete_activity),
        )
        // Submissions
        .route("/api/submissions", post(submissions::create_submission))
        .route("/api/submissions/mine", get(submissions::my_submissions))
        .route(
            "/api/submissions/pending",
            get(submissions::pending_submissions),
        )
        .route("/api/submissions/all", get(submissions::all_submissions))
        .route(
            "/api/submissions/{id}/review",
            patch(submissions::review_submission),
        )
        .route(
            "/api/submissions/distribution",
            post(submissions::record_distribution),
        )
        .route(
            "/api/submissions/distributions",
            get(submissions::list_distributions),
        )
        // Moderators
        .route(
            "/api/moderators",
            get(moderators::list_moderators).post(moderators::add_moderator),
        )
        .route(
            "/api/moderators/check",
            get(moderators::check_moderator_status),
        )
        .route(
            "/api/moderators/{wallet_address}",
            delete(moderators::remove_moderator),
        )
}

/// GET /api/health — Liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "Club Rewards API"
    }))
}
