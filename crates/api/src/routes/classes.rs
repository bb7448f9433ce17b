//! Class routes.
//!
//! Instructor assignment goes through the assignability policy: a profile
//! whose most recent invite is inactive cannot be put in front of a class.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::{ClassResponse, CreateClassRequest, Role, UpdateClassRequest};
use domain::services::is_assignable;
use persistence::repositories::{
    ClassRepository, FranchiseRepository, InviteRepository, ProfileRepository,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// Verify a profile may be assigned as instructor for this franchise.
async fn check_assignable(
    state: &AppState,
    franchise_id: Uuid,
    instructor_id: Uuid,
) -> Result<(), ApiError> {
    let profile_repo = ProfileRepository::new(state.pool.clone());
    let invite_repo = InviteRepository::new(state.pool.clone());

    let profile = profile_repo
        .find_by_id(instructor_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Instructor not found".to_string()))?;

    let role: Role = profile.role.into();
    if profile.franchise_id != Some(franchise_id) {
        return Err(ApiError::Validation(
            "Instructor belongs to a different franchise".to_string(),
        ));
    }

    let latest_status = invite_repo
        .latest_status_for_email(franchise_id, &profile.email)
        .await?
        .map(Into::into);

    if !is_assignable(role, latest_status) {
        return Err(ApiError::Conflict(
            "That instructor cannot be assigned to classes".to_string(),
        ));
    }

    Ok(())
}

/// Create a class.
///
/// POST /api/v1/franchises/:franchise_id/classes
pub async fn create_class(
    State(state): State<AppState>,
    Path(franchise_id): Path<Uuid>,
    Json(request): Json<CreateClassRequest>,
) -> Result<(StatusCode, Json<ClassResponse>), ApiError> {
    request.validate()?;

    let name = request.name.trim().to_string();
    if name.is_empty() {
        return Err(ApiError::Validation("Enter a class name".to_string()));
    }

    let franchise_repo = FranchiseRepository::new(state.pool.clone());
    if franchise_repo.find_by_id(franchise_id).await?.is_none() {
        return Err(ApiError::NotFound("Franchise not found".to_string()));
    }

    if let Some(instructor_id) = request.instructor_id {
        check_assignable(&state, franchise_id, instructor_id).await?;
    }

    let repo = ClassRepository::new(state.pool.clone());
    let entity = repo
        .create(
            franchise_id,
            &name,
            request.schedule.as_deref(),
            request.instructor_id,
        )
        .await?;

    info!(class_id = %entity.id, franchise_id = %franchise_id, "Class created");

    Ok((StatusCode::CREATED, Json(entity.into())))
}

/// List classes for a franchise.
///
/// GET /api/v1/franchises/:franchise_id/classes
pub async fn list_classes(
    State(state): State<AppState>,
    Path(franchise_id): Path<Uuid>,
) -> Result<Json<Vec<ClassResponse>>, ApiError> {
    let repo = ClassRepository::new(state.pool.clone());
    let classes = repo.list_by_franchise(franchise_id).await?;

    Ok(Json(classes.into_iter().map(Into::into).collect()))
}

/// Update a class; assigning an instructor re-checks assignability.
///
/// PATCH /api/v1/classes/:class_id
pub async fn update_class(
    State(state): State<AppState>,
    Path(class_id): Path<Uuid>,
    Json(request): Json<UpdateClassRequest>,
) -> Result<Json<ClassResponse>, ApiError> {
    request.validate()?;

    let name = request.name.as_deref().map(str::trim);
    if matches!(name, Some("")) {
        return Err(ApiError::Validation("Enter a class name".to_string()));
    }

    let repo = ClassRepository::new(state.pool.clone());
    let existing = repo
        .find_by_id(class_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Class not found".to_string()))?;

    if let Some(instructor_id) = request.instructor_id {
        check_assignable(&state, existing.franchise_id, instructor_id).await?;
    }

    let entity = repo
        .update(
            class_id,
            name,
            request.schedule.as_deref(),
            request.instructor_id,
            false,
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Class not found".to_string()))?;

    info!(class_id = %class_id, "Class updated");

    Ok(Json(entity.into()))
}

/// Delete a class.
///
/// DELETE /api/v1/classes/:class_id
pub async fn delete_class(
    State(state): State<AppState>,
    Path(class_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = ClassRepository::new(state.pool.clone());
    let deleted = repo.delete(class_id).await?;

    if deleted == 0 {
        return Err(ApiError::NotFound("Class not found".to_string()));
    }

    info!(class_id = %class_id, "Class deleted");

    Ok(StatusCode::NO_CONTENT)
}
