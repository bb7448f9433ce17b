//! Feedback note entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::FeedbackNoteResponse;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the feedback_notes table.
#[derive(Debug, Clone, FromRow)]
pub struct FeedbackNoteEntity {
    pub id: Uuid,
    pub student_id: Uuid,
    pub note: String,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<FeedbackNoteEntity> for FeedbackNoteResponse {
    fn from(entity: FeedbackNoteEntity) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            note: entity.note,
            created_by: entity.created_by,
            created_at: entity.created_at,
        }
    }
}
