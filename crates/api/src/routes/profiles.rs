//! Profile routes.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use domain::models::{ListProfilesQuery, ProfileResponse, UpdateProfileRequest};
use persistence::repositories::ProfileRepository;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// Get a profile by id.
///
/// GET /api/v1/profiles/:profile_id
pub async fn get_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let repo = ProfileRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(profile_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;

    Ok(Json(entity.into()))
}

/// Update a profile's display name.
///
/// PATCH /api/v1/profiles/:profile_id
pub async fn update_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    request.validate()?;

    let full_name = request.full_name.trim();
    if full_name.is_empty() {
        return Err(ApiError::Validation("Enter a name".to_string()));
    }

    let repo = ProfileRepository::new(state.pool.clone());
    let entity = repo
        .update_full_name(profile_id, full_name)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;

    info!(profile_id = %profile_id, "Profile updated");

    Ok(Json(entity.into()))
}

/// List profiles under a franchise, optionally filtered by role.
///
/// GET /api/v1/franchises/:franchise_id/profiles?role=instructor
pub async fn list_profiles(
    State(state): State<AppState>,
    Path(franchise_id): Path<Uuid>,
    Query(query): Query<ListProfilesQuery>,
) -> Result<Json<Vec<ProfileResponse>>, ApiError> {
    let repo = ProfileRepository::new(state.pool.clone());

    let role_db = query.role_filter().map(Into::into);
    let profiles = repo.list_by_franchise(franchise_id, role_db).await?;

    Ok(Json(profiles.into_iter().map(Into::into).collect()))
}
