//! Franchise routes (HQ dashboard).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::{CreateFranchiseRequest, FranchiseResponse, UpdateFranchiseRequest};
use persistence::repositories::FranchiseRepository;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// Create a franchise.
///
/// POST /api/v1/franchises
pub async fn create_franchise(
    State(state): State<AppState>,
    Json(request): Json<CreateFranchiseRequest>,
) -> Result<(StatusCode, Json<FranchiseResponse>), ApiError> {
    request.validate()?;

    let name = request.name.trim().to_string();
    if name.is_empty() {
        return Err(ApiError::Validation("Enter a franchise name".to_string()));
    }

    let repo = FranchiseRepository::new(state.pool.clone());
    let entity = repo.create(&name, request.owner_id).await?;

    info!(franchise_id = %entity.id, name = %name, "Franchise created");

    Ok((StatusCode::CREATED, Json(entity.into())))
}

/// List all franchises.
///
/// GET /api/v1/franchises
pub async fn list_franchises(
    State(state): State<AppState>,
) -> Result<Json<Vec<FranchiseResponse>>, ApiError> {
    let repo = FranchiseRepository::new(state.pool.clone());
    let franchises = repo.list().await?;
    Ok(Json(franchises.into_iter().map(Into::into).collect()))
}

/// Get a franchise by id.
///
/// GET /api/v1/franchises/:franchise_id
pub async fn get_franchise(
    State(state): State<AppState>,
    Path(franchise_id): Path<Uuid>,
) -> Result<Json<FranchiseResponse>, ApiError> {
    let repo = FranchiseRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(franchise_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Franchise not found".to_string()))?;

    Ok(Json(entity.into()))
}

/// Update a franchise's name and/or owner.
///
/// PATCH /api/v1/franchises/:franchise_id
pub async fn update_franchise(
    State(state): State<AppState>,
    Path(franchise_id): Path<Uuid>,
    Json(request): Json<UpdateFranchiseRequest>,
) -> Result<Json<FranchiseResponse>, ApiError> {
    request.validate()?;

    let name = request.name.as_deref().map(str::trim);
    if matches!(name, Some("")) {
        return Err(ApiError::Validation("Enter a franchise name".to_string()));
    }

    let repo = FranchiseRepository::new(state.pool.clone());
    let entity = repo
        .update(franchise_id, name, request.owner_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Franchise not found".to_string()))?;

    info!(franchise_id = %franchise_id, "Franchise updated");

    Ok(Json(entity.into()))
}
