//! CRM completion webhook.
//!
//! The single external-facing mutation point: the CRM calls back here once
//! a registrant finishes the external signup flow. The token from the
//! registration link is the sole credential.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::models::CompleteInviteRequest;
use persistence::repositories::{InviteRepository, ProfileRepository};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::WebhookSecret;
use crate::middleware::metrics::record_invite_completed;

/// Success body: `{"ok": true}`.
#[derive(Debug, Serialize)]
pub struct CompleteInviteResponse {
    pub ok: bool,
}

/// Failures of the completion webhook, rendered per the CRM contract as
/// `{"error": <message>}` with the matching status code.
#[derive(Debug, Error)]
pub enum CompleteInviteError {
    #[error("token and email are required")]
    MissingFields,

    #[error("invite not found")]
    InviteNotFound,

    #[error("invite inactive")]
    InviteInactive,

    #[error("{0}")]
    Store(String),
}

impl IntoResponse for CompleteInviteError {
    fn into_response(self) -> Response {
        let status = match &self {
            CompleteInviteError::MissingFields => StatusCode::BAD_REQUEST,
            CompleteInviteError::InviteNotFound => StatusCode::NOT_FOUND,
            CompleteInviteError::InviteInactive => StatusCode::CONFLICT,
            CompleteInviteError::Store(msg) => {
                error!("Invite completion store failure: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<sqlx::Error> for CompleteInviteError {
    fn from(err: sqlx::Error) -> Self {
        // Reuse the dashboard-facing mapping for the message text
        CompleteInviteError::Store(ApiError::from(err).to_string())
    }
}

/// Complete an instructor invite.
///
/// POST /api/v1/webhooks/crm/instructor-completed
///
/// The shared-secret extractor rejects unauthorised callers before any row
/// is read. The invite transition commits before the profile promotion; a
/// promotion failure therefore surfaces as an error even though the invite
/// is already active.
pub async fn instructor_completed(
    _secret: WebhookSecret,
    State(state): State<AppState>,
    Json(request): Json<CompleteInviteRequest>,
) -> Result<Json<CompleteInviteResponse>, CompleteInviteError> {
    let token = request.token.trim().to_string();
    let email = request.email.trim().to_lowercase();

    if token.is_empty() || email.is_empty() {
        return Err(CompleteInviteError::MissingFields);
    }

    let invite_repo = InviteRepository::new(state.pool.clone());
    let profile_repo = ProfileRepository::new(state.pool.clone());

    // 1) Find invite by exact token match
    let invite = invite_repo
        .find_by_token(&token)
        .await?
        .ok_or(CompleteInviteError::InviteNotFound)?;

    // A deactivated invite cannot be resurrected by replaying an old
    // completion call; pending and active both complete (idempotent).
    if !invite.is_completable() {
        return Err(CompleteInviteError::InviteInactive);
    }

    // 2) Mark invite completed + active
    invite_repo.mark_active(invite.id).await?;

    record_invite_completed();

    info!(
        invite_id = %invite.id,
        franchise_id = %invite.franchise_id,
        email = %email,
        "Instructor invite completed"
    );

    // 3) Promote a matching profile, when one exists; a registrant without
    // a profile yet is picked up later by the self-registration flow
    if let Some(profile) = profile_repo.find_by_email(&email).await? {
        profile_repo
            .promote_to_instructor(
                profile.id,
                invite.franchise_id,
                request.full_name.as_deref(),
            )
            .await?;

        info!(
            profile_id = %profile.id,
            franchise_id = %invite.franchise_id,
            "Profile promoted to instructor"
        );
    }

    Ok(Json(CompleteInviteResponse { ok: true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_match_contract() {
        assert_eq!(
            CompleteInviteError::MissingFields.to_string(),
            "token and email are required"
        );
        assert_eq!(
            CompleteInviteError::InviteNotFound.to_string(),
            "invite not found"
        );
        assert_eq!(
            CompleteInviteError::InviteInactive.to_string(),
            "invite inactive"
        );
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            CompleteInviteError::MissingFields.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CompleteInviteError::InviteNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CompleteInviteError::InviteInactive.into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            CompleteInviteError::Store("boom".to_string())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
