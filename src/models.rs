//! Request and response models for the API.
//!
//! All models use serde for serialization/deserialization.
//! Row models mirror the hosted data store's tables and pass through
//! whatever the store returns (IDs and timestamps stay strings).

use serde::{Deserialize, Serialize};

// ============================================================================
// Auth Models
// ============================================================================

/// Request body for wallet login.
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub wallet_address: String,
    pub signature: String, // base58
    pub message: String,
}

/// Response after successful login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub wallet_address: String,
    pub is_moderator: bool,
}

// ============================================================================
// Activity Models
// ============================================================================

/// Request body for creating an activity.
#[derive(Debug, Deserialize)]
pub struct ActivityCreate {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub token_reward: u64,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "general".to_string()
}

/// Partial update for an activity. Doubles as the PATCH body sent to the
/// data store; absent fields are omitted so the store leaves them untouched.
#[derive(Debug, Deserialize, Serialize)]
pub struct ActivityUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_reward: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ActivityUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.token_reward.is_none()
            && self.category.is_none()
            && self.is_active.is_none()
    }
}

/// Insert body for a new activity row.
#[derive(Debug, Serialize)]
pub struct NewActivity {
    pub title: String,
    pub description: String,
    pub token_reward: u64,
    pub category: String,
    pub created_by: String,
}

/// Activity row as returned by the data store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub token_reward: u64,
    pub category: String,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: String,
}

/// Query parameters for listing activities.
#[derive(Debug, Deserialize)]
pub struct ListActivitiesParams {
    #[serde(default = "default_true")]
    pub active_only: bool,
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Submission Models
// ============================================================================

/// Request body for submitting activity proof.
#[derive(Debug, Deserialize)]
pub struct SubmissionCreate {
    pub activity_id: String,
    #[serde(default)]
    pub proof_text: String,
    pub proof_url: Option<String>,
}

/// Review verdict for a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Request body for reviewing a submission.
#[derive(Debug, Deserialize)]
pub struct SubmissionReview {
    pub status: ReviewStatus,
    pub review_note: Option<String>,
}

/// Insert body for a new submission row.
#[derive(Debug, Serialize)]
pub struct NewSubmission {
    pub activity_id: String,
    pub wallet_address: String,
    pub proof_text: String,
    pub proof_url: Option<String>,
    pub status: String,
}

/// Update body applied when a moderator reviews a submission.
/// `review_note` serializes as null when absent so the column is cleared.
#[derive(Debug, Serialize)]
pub struct SubmissionReviewUpdate {
    pub status: String,
    pub reviewer_wallet: String,
    pub review_note: Option<String>,
    pub reviewed_at: String,
}

/// Activity columns embedded in a submission query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityJoin {
    pub title: String,
    pub token_reward: u64,
}

/// Submission row as returned by the data store, optionally with the
/// parent activity embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRow {
    pub id: String,
    pub activity_id: String,
    pub wallet_address: String,
    pub proof_text: String,
    pub proof_url: Option<String>,
    pub status: String,
    pub reviewer_wallet: Option<String>,
    pub review_note: Option<String>,
    pub created_at: String,
    pub reviewed_at: Option<String>,
    #[serde(default)]
    pub activities: Option<ActivityJoin>,
}

/// Submission as exposed by the API, with the joined activity flattened.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub id: String,
    pub activity_id: String,
    pub wallet_address: String,
    pub proof_text: String,
    pub proof_url: Option<String>,
    pub status: String,
    pub reviewer_wallet: Option<String>,
    pub review_note: Option<String>,
    pub created_at: String,
    pub reviewed_at: Option<String>,
    pub activity_title: Option<String>,
    pub token_reward: Option<u64>,
}

impl From<SubmissionRow> for SubmissionResponse {
    fn from(row: SubmissionRow) -> Self {
        let (activity_title, token_reward) = match row.activities {
            Some(activity) => (Some(activity.title), Some(activity.token_reward)),
            None => (None, None),
        };
        SubmissionResponse {
            id: row.id,
            activity_id: row.activity_id,
            wallet_address: row.wallet_address,
            proof_text: row.proof_text,
            proof_url: row.proof_url,
            status: row.status,
            reviewer_wallet: row.reviewer_wallet,
            review_note: row.review_note,
            created_at: row.created_at,
            reviewed_at: row.reviewed_at,
            activity_title,
            token_reward,
        }
    }
}

/// Query parameters for listing all submissions.
#[derive(Debug, Deserialize)]
pub struct ListSubmissionsParams {
    pub status: Option<String>,
}

// ============================================================================
// Token Distribution Models
// ============================================================================

/// Record of an externally-signed token transfer. The transfer itself
/// happens in the moderator's wallet; this service only stores the result.
#[derive(Debug, Deserialize, Serialize)]
pub struct DistributionRecord {
    pub submission_id: String,
    pub from_wallet: String,
    pub to_wallet: String,
    pub amount: u64,
    pub tx_signature: String,
}

/// Distribution row as returned by the data store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Distribution {
    pub id: String,
    pub submission_id: String,
    pub from_wallet: String,
    pub to_wallet: String,
    pub amount: u64,
    pub tx_signature: String,
    pub created_at: String,
}

// ============================================================================
// Moderator Models
// ============================================================================

/// Moderator status for the current caller.
#[derive(Debug, Serialize)]
pub struct ModeratorCheck {
    pub is_moderator: bool,
    pub wallet_address: String,
}

/// Request body for adding a moderator.
#[derive(Debug, Deserialize, Serialize)]
pub struct ModeratorCreate {
    pub wallet_address: String,
    #[serde(default = "default_moderator_name")]
    pub name: String,
}

fn default_moderator_name() -> String {
    "Moderator".to_string()
}

/// Moderator row as returned by the data store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Moderator {
    pub id: String,
    pub wallet_address: String,
    pub name: String,
    pub created_at: String,
}

// ============================================================================
// Balance Models
// ============================================================================

/// SPL token balance for a wallet, read from the Solana RPC.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub wallet_address: String,
    pub balance: f64,
    pub mint: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_status_serde() {
        let review: SubmissionReview =
            serde_json::from_str(r#"{"status": "approved", "review_note": "nice work"}"#).unwrap();
        assert_eq!(review.status, ReviewStatus::Approved);
        assert_eq!(review.review_note.as_deref(), Some("nice work"));

        let review: SubmissionReview = serde_json::from_str(r#"{"status": "rejected"}"#).unwrap();
        assert_eq!(review.status, ReviewStatus::Rejected);
        assert!(review.review_note.is_none());
    }

    #[test]
    fn test_review_status_rejects_other_values() {
        let result = serde_json::from_str::<SubmissionReview>(r#"{"status": "pending"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_activity_update_skips_absent_fields() {
        let update = ActivityUpdate {
            title: Some("New title".to_string()),
            description: None,
            token_reward: None,
            category: None,
            is_active: Some(false),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "title": "New title", "is_active": false })
        );
        assert!(!update.is_empty());

        let empty: ActivityUpdate = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
        assert_eq!(serde_json::to_value(&empty).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn test_submission_response_flattens_join() {
        let row = SubmissionRow {
            id: "sub-1".to_string(),
            activity_id: "act-1".to_string(),
            wallet_address: "W1".to_string(),
            proof_text: "done".to_string(),
            proof_url: None,
            status: "pending".to_string(),
            reviewer_wallet: None,
            review_note: None,
            created_at: "2026-01-01T00:00:00Z".to_string(),
            reviewed_at: None,
            activities: Some(ActivityJoin {
                title: "Attend meetup".to_string(),
                token_reward: 50,
            }),
        };

        let resp = SubmissionResponse::from(row);
        assert_eq!(resp.activity_title.as_deref(), Some("Attend meetup"));
        assert_eq!(resp.token_reward, Some(50));
    }

    #[test]
    fn test_submission_row_without_join() {
        // Rows fetched without the embedded activity deserialize fine
        let row: SubmissionRow = serde_json::from_value(serde_json::json!({
            "id": "sub-1",
            "activity_id": "act-1",
            "wallet_address": "W1",
            "proof_text": "",
            "proof_url": null,
            "status": "pending",
            "reviewer_wallet": null,
            "review_note": null,
            "created_at": "2026-01-01T00:00:00Z",
            "reviewed_at": null
        }))
        .unwrap();
        assert!(row.activities.is_none());

        let resp = SubmissionResponse::from(row);
        assert!(resp.activity_title.is_none());
        assert!(resp.token_reward.is_none());
    }

    #[test]
    fn test_review_update_serializes_null_note() {
        let update = SubmissionReviewUpdate {
            status: "approved".to_string(),
            reviewer_wallet: "M1".to_string(),
            review_note: None,
            reviewed_at: "2026-01-01T00:00:00+00:00".to_string(),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["review_note"], serde_json::Value::Null);
    }

    #[test]
    fn test_moderator_create_default_name() {
        let body: ModeratorCreate =
            serde_json::from_str(r#"{"wallet_address": "W1"}"#).unwrap();
        assert_eq!(body.name, "Moderator");
    }

    #[test]
    fn test_activity_create_defaults() {
        let body: ActivityCreate =
            serde_json::from_str(r#"{"title": "Meetup", "token_reward": 10}"#).unwrap();
        assert_eq!(body.description, "");
        assert_eq!(body.category, "general");
    }
}
