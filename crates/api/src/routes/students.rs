//! Student routes: CRUD, belt awards, feedback notes, and avatars.
//!
//! The student detail merges the base record with belt history and notes,
//! the shape the dashboards render in the detail panel. Avatars live in the
//! external object store; the student row only keeps the path.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use domain::models::{
    AddFeedbackNoteRequest, AwardBeltRequest, BeltAwardResponse, CreateStudentRequest,
    FeedbackNoteResponse, ListStudentsQuery, StudentDetailResponse, StudentResponse,
    UpdateStudentRequest,
};
use persistence::repositories::{
    BeltAwardRepository, FeedbackNoteRepository, FranchiseRepository, StudentRepository,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// Enrol a student.
///
/// POST /api/v1/franchises/:franchise_id/students
pub async fn create_student(
    State(state): State<AppState>,
    Path(franchise_id): Path<Uuid>,
    Json(request): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    request.validate()?;

    let full_name = request.full_name.trim().to_string();
    if full_name.is_empty() {
        return Err(ApiError::Validation("Enter student name".to_string()));
    }

    let franchise_repo = FranchiseRepository::new(state.pool.clone());
    if franchise_repo.find_by_id(franchise_id).await?.is_none() {
        return Err(ApiError::NotFound("Franchise not found".to_string()));
    }

    let repo = StudentRepository::new(state.pool.clone());
    let entity = repo
        .create(
            franchise_id,
            request.user_id,
            &full_name,
            request.email.as_deref(),
        )
        .await?;

    info!(student_id = %entity.id, franchise_id = %franchise_id, "Student created");

    Ok((StatusCode::CREATED, Json(entity.into())))
}

/// List students in a franchise with their current belt.
///
/// GET /api/v1/franchises/:franchise_id/students
pub async fn list_students(
    State(state): State<AppState>,
    Path(franchise_id): Path<Uuid>,
    Query(query): Query<ListStudentsQuery>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let repo = StudentRepository::new(state.pool.clone());
    let students = repo
        .list_by_franchise(franchise_id, query.per_page(), query.offset())
        .await?;

    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// Get a student's detail: record + belt history + feedback notes.
///
/// GET /api/v1/students/:student_id
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<StudentDetailResponse>, ApiError> {
    let student_repo = StudentRepository::new(state.pool.clone());
    let belt_repo = BeltAwardRepository::new(state.pool.clone());
    let note_repo = FeedbackNoteRepository::new(state.pool.clone());

    let student = student_repo
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    let belt_awards: Vec<BeltAwardResponse> = belt_repo
        .list_by_student(student_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let feedback_notes: Vec<FeedbackNoteResponse> = note_repo
        .list_by_student(student_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let mut response: StudentResponse = student.into();
    if let Some(latest) = belt_awards.first() {
        response.current_belt = Some(latest.belt.clone());
        response.last_belt_awarded_at = Some(latest.awarded_at);
    }

    Ok(Json(StudentDetailResponse {
        student: response,
        belt_awards,
        feedback_notes,
    }))
}

/// Update a student's name and/or email.
///
/// PATCH /api/v1/students/:student_id
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
    Json(request): Json<UpdateStudentRequest>,
) -> Result<Json<StudentResponse>, ApiError> {
    request.validate()?;

    let full_name = request.full_name.as_deref().map(str::trim);
    if matches!(full_name, Some("")) {
        return Err(ApiError::Validation("Enter student name".to_string()));
    }

    let repo = StudentRepository::new(state.pool.clone());
    let entity = repo
        .update(student_id, full_name, request.email.as_deref())
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    info!(student_id = %student_id, "Student updated");

    Ok(Json(entity.into()))
}

/// Delete a student (belt awards and notes cascade).
///
/// DELETE /api/v1/students/:student_id
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = StudentRepository::new(state.pool.clone());
    let deleted = repo.delete(student_id).await?;

    if deleted == 0 {
        return Err(ApiError::NotFound("Student not found".to_string()));
    }

    info!(student_id = %student_id, "Student deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Award a belt to a student.
///
/// POST /api/v1/students/:student_id/belts
pub async fn award_belt(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
    Json(request): Json<AwardBeltRequest>,
) -> Result<(StatusCode, Json<BeltAwardResponse>), ApiError> {
    request.validate()?;

    let student_repo = StudentRepository::new(state.pool.clone());
    if student_repo.find_by_id(student_id).await?.is_none() {
        return Err(ApiError::NotFound("Student not found".to_string()));
    }

    let repo = BeltAwardRepository::new(state.pool.clone());
    let entity = repo
        .create(
            student_id,
            request.belt.trim(),
            request.awarded_by,
            request.awarded_at,
        )
        .await?;

    info!(student_id = %student_id, belt = %entity.belt, "Belt awarded");

    Ok((StatusCode::CREATED, Json(entity.into())))
}

/// Add a feedback note to a student.
///
/// POST /api/v1/students/:student_id/notes
pub async fn add_feedback_note(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
    Json(request): Json<AddFeedbackNoteRequest>,
) -> Result<(StatusCode, Json<FeedbackNoteResponse>), ApiError> {
    request.validate()?;

    let student_repo = StudentRepository::new(state.pool.clone());
    if student_repo.find_by_id(student_id).await?.is_none() {
        return Err(ApiError::NotFound("Student not found".to_string()));
    }

    let repo = FeedbackNoteRepository::new(state.pool.clone());
    let entity = repo
        .create(student_id, request.note.trim(), request.created_by)
        .await?;

    info!(student_id = %student_id, "Feedback note added");

    Ok((StatusCode::CREATED, Json(entity.into())))
}

/// Avatar upload request: base64 content plus its content type.
#[derive(Debug, Deserialize)]
pub struct UploadAvatarRequest {
    pub content_base64: String,
    pub content_type: String,
}

/// Avatar upload result.
#[derive(Debug, Serialize)]
pub struct UploadAvatarResponse {
    pub path: String,
}

/// Signed avatar URL.
#[derive(Debug, Serialize)]
pub struct AvatarUrlResponse {
    pub url: String,
    pub expires_in_secs: u64,
}

/// Upload a student avatar to the object store.
///
/// POST /api/v1/students/:student_id/avatar
pub async fn upload_avatar(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
    Json(request): Json<UploadAvatarRequest>,
) -> Result<Json<UploadAvatarResponse>, ApiError> {
    let storage = state.storage.as_ref().ok_or_else(|| {
        ApiError::ServiceUnavailable("Avatar storage is not configured".to_string())
    })?;

    let student_repo = StudentRepository::new(state.pool.clone());
    let student = student_repo
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    let bytes = BASE64
        .decode(request.content_base64.as_bytes())
        .map_err(|_| ApiError::Validation("content_base64 is not valid base64".to_string()))?;

    let extension = match request.content_type.as_str() {
        "image/png" => "png",
        _ => "jpg",
    };
    let path = format!("{}/{}.{}", student.franchise_id, student_id, extension);

    storage
        .upload(&path, bytes, &request.content_type, true)
        .await
        .map_err(|e| ApiError::Internal(format!("Avatar upload failed: {}", e)))?;

    student_repo.set_avatar_path(student_id, &path).await?;

    info!(student_id = %student_id, path = %path, "Avatar uploaded");

    Ok(Json(UploadAvatarResponse { path }))
}

/// Issue a time-limited signed URL for a student's avatar.
///
/// GET /api/v1/students/:student_id/avatar-url
pub async fn get_avatar_url(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<AvatarUrlResponse>, ApiError> {
    let storage = state.storage.as_ref().ok_or_else(|| {
        ApiError::ServiceUnavailable("Avatar storage is not configured".to_string())
    })?;

    let student_repo = StudentRepository::new(state.pool.clone());
    let student = student_repo
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    let path = student
        .avatar_path
        .ok_or_else(|| ApiError::NotFound("Student has no avatar".to_string()))?;

    let url = storage
        .create_signed_url(&path)
        .await
        .map_err(|e| ApiError::Internal(format!("Signed URL failed: {}", e)))?;

    Ok(Json(AvatarUrlResponse {
        url,
        expires_in_secs: storage.signed_url_expiry_secs(),
    }))
}
