//! Instructor invite domain models.
//!
//! Request/response DTOs for the invite API and the invite status machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Length of generated invite tokens in hex characters.
pub const INVITE_TOKEN_LEN: usize = 48;

/// Instructor invite status.
///
/// `Expired` is part of the declared lifecycle but no code path assigns it;
/// invites are only retired through explicit deactivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InviteStatus {
    Pending,
    Active,
    Inactive,
    Expired,
}

impl InviteStatus {
    /// Whether the completion webhook may transition this invite to active.
    ///
    /// Completion is idempotent: an already-active invite completes again
    /// without error. Only `inactive` is terminal.
    pub fn is_completable(self) -> bool {
        !matches!(self, InviteStatus::Inactive)
    }

    /// Whether this invite blocks a new invite for the same email.
    pub fn is_open(self) -> bool {
        matches!(self, InviteStatus::Pending | InviteStatus::Active)
    }
}

impl std::fmt::Display for InviteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InviteStatus::Pending => write!(f, "pending"),
            InviteStatus::Active => write!(f, "active"),
            InviteStatus::Inactive => write!(f, "inactive"),
            InviteStatus::Expired => write!(f, "expired"),
        }
    }
}

/// Generate a fresh invite token: `INVITE_TOKEN_LEN` lowercase hex characters
/// from a cryptographically secure source. The token is the sole capability
/// for completing the invite, so it must be unguessable.
pub fn generate_invite_token() -> String {
    shared::crypto::generate_hex_token(INVITE_TOKEN_LEN)
}

/// Request to invite a prospective instructor.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateInviteRequest {
    /// Profile id of the issuing franchise owner.
    pub invited_by: Uuid,

    /// Display name of the invitee.
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub full_name: String,

    /// Email address of the invitee (normalized to lowercase on insert).
    #[validate(length(max = 255, message = "Email must be at most 255 characters"))]
    pub email: String,
}

/// A single invite in API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct InviteSummary {
    pub id: Uuid,
    pub franchise_id: Uuid,
    pub invited_by: Uuid,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub status: InviteStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Response after creating an invite.
///
/// `notified` reports the outcome of the best-effort CRM call; a failed
/// notification never undoes the created invite.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateInviteResponse {
    pub invite: InviteSummary,
    pub registration_url: String,
    pub notified: bool,
    pub message: String,
}

/// Query parameters for listing invites.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub struct ListInvitesQuery {
    /// Filter by status: "pending", "active", "inactive", "all" (default: "all").
    pub status: Option<String>,

    /// Page number (default: 1).
    pub page: Option<i64>,

    /// Items per page (default: 50, max: 100).
    pub per_page: Option<i64>,
}

impl ListInvitesQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn per_page(&self) -> i64 {
        self.per_page.unwrap_or(50).clamp(1, 100)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.per_page()
    }

    /// Parsed status filter; `None` means no filtering.
    pub fn status_filter(&self) -> Option<InviteStatus> {
        match self.status.as_deref() {
            Some("pending") => Some(InviteStatus::Pending),
            Some("active") => Some(InviteStatus::Active),
            Some("inactive") => Some(InviteStatus::Inactive),
            Some("expired") => Some(InviteStatus::Expired),
            _ => None,
        }
    }
}

/// Response for listing invites.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListInvitesResponse {
    pub invites: Vec<InviteSummary>,
    pub pagination: InvitePagination,
    pub summary: InviteSummaryCounts,
}

/// Pagination info for invite listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct InvitePagination {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl InvitePagination {
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let total_pages = (total + per_page - 1) / per_page;
        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }
}

/// Per-status counts for a franchise's invites.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct InviteSummaryCounts {
    pub pending: i64,
    pub active: i64,
    pub inactive: i64,
}

/// Body of the CRM completion webhook.
///
/// Extra fields the CRM sends alongside these are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CompleteInviteRequest {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Request to deactivate an instructor by email.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct DeactivateInstructorRequest {
    #[validate(length(max = 255, message = "Email must be at most 255 characters"))]
    pub email: String,
}

/// Result of an instructor deactivation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DeactivateInstructorResponse {
    pub invites_deactivated: u64,
    pub profile_demoted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_invite_token_length_and_charset() {
        let token = generate_invite_token();
        assert_eq!(token.len(), INVITE_TOKEN_LEN);
        assert!(token.len() >= 48);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(token, token.to_lowercase());
    }

    #[test]
    fn test_generate_invite_token_unique() {
        let a = generate_invite_token();
        let b = generate_invite_token();
        assert_ne!(a, b);
    }

    #[test]
    fn test_status_is_completable() {
        assert!(InviteStatus::Pending.is_completable());
        assert!(InviteStatus::Active.is_completable());
        assert!(InviteStatus::Expired.is_completable());
        assert!(!InviteStatus::Inactive.is_completable());
    }

    #[test]
    fn test_status_is_open() {
        assert!(InviteStatus::Pending.is_open());
        assert!(InviteStatus::Active.is_open());
        assert!(!InviteStatus::Inactive.is_open());
        assert!(!InviteStatus::Expired.is_open());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&InviteStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&InviteStatus::Inactive).unwrap(),
            "\"inactive\""
        );
        assert_eq!(
            serde_json::to_string(&InviteStatus::Expired).unwrap(),
            "\"expired\""
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(InviteStatus::Active.to_string(), "active");
        assert_eq!(InviteStatus::Expired.to_string(), "expired");
    }

    #[test]
    fn test_list_invites_query_defaults() {
        let query = ListInvitesQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.per_page(), 50);
        assert_eq!(query.offset(), 0);
        assert!(query.status_filter().is_none());
    }

    #[test]
    fn test_list_invites_query_clamping() {
        let query = ListInvitesQuery {
            status: None,
            page: Some(-3),
            per_page: Some(500),
        };
        assert_eq!(query.page(), 1);
        assert_eq!(query.per_page(), 100);
    }

    #[test]
    fn test_list_invites_query_status_filter() {
        let query = ListInvitesQuery {
            status: Some("inactive".to_string()),
            page: None,
            per_page: None,
        };
        assert_eq!(query.status_filter(), Some(InviteStatus::Inactive));

        let all = ListInvitesQuery {
            status: Some("all".to_string()),
            page: None,
            per_page: None,
        };
        assert!(all.status_filter().is_none());
    }

    #[test]
    fn test_pagination_new() {
        let pagination = InvitePagination::new(2, 25, 75);
        assert_eq!(pagination.total_pages, 3);
        let uneven = InvitePagination::new(1, 10, 11);
        assert_eq!(uneven.total_pages, 2);
    }

    #[test]
    fn test_complete_invite_request_missing_fields_default() {
        let req: CompleteInviteRequest = serde_json::from_str("{}").unwrap();
        assert!(req.token.is_empty());
        assert!(req.email.is_empty());
        assert!(req.full_name.is_none());
    }

    #[test]
    fn test_complete_invite_request_ignores_extra_fields() {
        let req: CompleteInviteRequest = serde_json::from_str(
            r#"{"token":"t","email":"e@x.com","contact_id":"ghl-123","source":"workflow"}"#,
        )
        .unwrap();
        assert_eq!(req.token, "t");
        assert_eq!(req.email, "e@x.com");
    }

    #[test]
    fn test_create_invite_request_validation() {
        let valid = CreateInviteRequest {
            invited_by: Uuid::new_v4(),
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
        };
        assert!(valid.validate().is_ok());

        let too_long = CreateInviteRequest {
            invited_by: Uuid::new_v4(),
            full_name: "x".repeat(101),
            email: "jane@x.com".to_string(),
        };
        assert!(too_long.validate().is_err());
    }
}
