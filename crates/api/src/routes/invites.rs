//! Instructor invite routes.
//!
//! Invite issuance fires a best-effort CRM notification; the invite row is
//! the durable record and survives notifier failure. Deactivation is the
//! administrative override that retires invites and demotes the profile.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::{
    generate_invite_token, CreateInviteRequest, CreateInviteResponse,
    DeactivateInstructorRequest, DeactivateInstructorResponse, InvitePagination,
    InviteSummary, InviteSummaryCounts, ListInvitesQuery, ListInvitesResponse, ProfileResponse,
};
use persistence::repositories::{FranchiseRepository, InviteRepository, ProfileRepository};
use shared::validation::normalize_email;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::{record_crm_notification, record_invite_created};
use crate::services::InviteCreatedPayload;

/// Create a new instructor invite.
///
/// POST /api/v1/franchises/:franchise_id/invites
///
/// Inserts a pending invite, then notifies the CRM so it can send the
/// welcome email with the registration link. A notification failure is
/// reported in the response but never rolls the invite back.
pub async fn create_invite(
    State(state): State<AppState>,
    Path(franchise_id): Path<Uuid>,
    Json(request): Json<CreateInviteRequest>,
) -> Result<(StatusCode, Json<CreateInviteResponse>), ApiError> {
    request.validate()?;

    let full_name = request.full_name.trim().to_string();
    if full_name.is_empty() {
        return Err(ApiError::Validation("Enter instructor name".to_string()));
    }

    let email = normalize_email(&request.email);
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::Validation(
            "Enter a valid email address".to_string(),
        ));
    }

    let franchise_repo = FranchiseRepository::new(state.pool.clone());
    let invite_repo = InviteRepository::new(state.pool.clone());

    let franchise = franchise_repo
        .find_by_id(franchise_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Franchise not found".to_string()))?;

    // One open invite per (franchise, email) at a time
    if invite_repo.has_open_invite(franchise_id, &email).await? {
        return Err(ApiError::Conflict(
            "That email already has an invite (pending or active)".to_string(),
        ));
    }

    let token = generate_invite_token();

    let entity = invite_repo
        .create(franchise_id, request.invited_by, &email, &full_name, &token)
        .await?;

    record_invite_created();

    info!(
        franchise_id = %franchise_id,
        invite_id = %entity.id,
        email = %email,
        invited_by = %request.invited_by,
        "Instructor invite created"
    );

    let registration_url = format!(
        "{}/register-instructor?token={}",
        state.config.server.public_base_url.trim_end_matches('/'),
        token
    );

    let payload = InviteCreatedPayload {
        event_type: InviteCreatedPayload::EVENT_TYPE,
        invite_id: entity.id,
        franchise_id,
        franchise_name: franchise.name,
        invited_by: request.invited_by,
        full_name: full_name.clone(),
        email: email.clone(),
        token,
        registration_url: registration_url.clone(),
    };

    // Best effort from here on: the invite row is already committed
    let (notified, message) = match state.crm.notify_invite_created(&payload).await {
        Ok(()) => (true, "Invite sent".to_string()),
        Err(e) => {
            warn!(
                invite_id = %entity.id,
                error = %e,
                "CRM notification failed; invite kept"
            );
            (
                false,
                "Invite created, but the CRM notification failed; resend from the dashboard"
                    .to_string(),
            )
        }
    };
    record_crm_notification(notified);

    Ok((
        StatusCode::CREATED,
        Json(CreateInviteResponse {
            invite: entity.into(),
            registration_url,
            notified,
            message,
        }),
    ))
}

/// List invites for a franchise with optional status filter.
///
/// GET /api/v1/franchises/:franchise_id/invites
pub async fn list_invites(
    State(state): State<AppState>,
    Path(franchise_id): Path<Uuid>,
    Query(query): Query<ListInvitesQuery>,
) -> Result<Json<ListInvitesResponse>, ApiError> {
    let franchise_repo = FranchiseRepository::new(state.pool.clone());
    if franchise_repo.find_by_id(franchise_id).await?.is_none() {
        return Err(ApiError::NotFound("Franchise not found".to_string()));
    }

    let invite_repo = InviteRepository::new(state.pool.clone());

    let status_db = query.status_filter().map(Into::into);
    let entities = invite_repo
        .list_by_franchise(franchise_id, status_db, query.per_page(), query.offset())
        .await?;

    let total = invite_repo
        .count_by_franchise(franchise_id, status_db)
        .await?;

    let counts = invite_repo.get_status_counts(franchise_id).await?;

    let invites: Vec<InviteSummary> = entities.into_iter().map(Into::into).collect();

    Ok(Json(ListInvitesResponse {
        invites,
        pagination: InvitePagination::new(query.page(), query.per_page(), total),
        summary: InviteSummaryCounts {
            pending: counts.pending,
            active: counts.active,
            inactive: counts.inactive,
        },
    }))
}

/// Deactivate an instructor by email.
///
/// POST /api/v1/franchises/:franchise_id/instructors/deactivate
///
/// Retires every non-inactive invite for the email and demotes a matching
/// instructor profile back to student. Nothing matching is a no-op, not an
/// error.
pub async fn deactivate_instructor(
    State(state): State<AppState>,
    Path(franchise_id): Path<Uuid>,
    Json(request): Json<DeactivateInstructorRequest>,
) -> Result<Json<DeactivateInstructorResponse>, ApiError> {
    request.validate()?;

    let email = normalize_email(&request.email);
    if email.is_empty() {
        return Err(ApiError::Validation(
            "Enter a valid email address".to_string(),
        ));
    }

    let invite_repo = InviteRepository::new(state.pool.clone());
    let profile_repo = ProfileRepository::new(state.pool.clone());

    let invites_deactivated = invite_repo
        .deactivate_for_email(franchise_id, &email)
        .await?;

    let mut profile_demoted = false;
    if let Some(profile) = profile_repo.find_by_email(&email).await? {
        profile_demoted = profile_repo
            .demote_to_student(profile.id, franchise_id)
            .await?
            > 0;
    }

    info!(
        franchise_id = %franchise_id,
        email = %email,
        invites_deactivated = invites_deactivated,
        profile_demoted = profile_demoted,
        "Instructor deactivated"
    );

    Ok(Json(DeactivateInstructorResponse {
        invites_deactivated,
        profile_demoted,
    }))
}

/// List instructors that may be assigned to classes.
///
/// GET /api/v1/franchises/:franchise_id/instructors/assignable
///
/// An instructor is excluded only when their most recent invite is
/// inactive; instructors predating the invite system have no invite rows
/// and stay assignable.
pub async fn list_assignable_instructors(
    State(state): State<AppState>,
    Path(franchise_id): Path<Uuid>,
) -> Result<Json<Vec<ProfileResponse>>, ApiError> {
    let profile_repo = ProfileRepository::new(state.pool.clone());

    let instructors = profile_repo
        .list_assignable_instructors(franchise_id)
        .await?;

    Ok(Json(instructors.into_iter().map(Into::into).collect()))
}
