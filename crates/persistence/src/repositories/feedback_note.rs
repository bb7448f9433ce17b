//! Repository for feedback note database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::FeedbackNoteEntity;

const NOTE_COLUMNS: &str = "id, student_id, note, created_by, created_at";

/// Repository for feedback note operations.
#[derive(Clone)]
pub struct FeedbackNoteRepository {
    pool: PgPool,
}

impl FeedbackNoteRepository {
    /// Creates a new feedback note repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Adds a note to a student.
    pub async fn create(
        &self,
        student_id: Uuid,
        note: &str,
        created_by: Option<Uuid>,
    ) -> Result<FeedbackNoteEntity, sqlx::Error> {
        sqlx::query_as::<_, FeedbackNoteEntity>(&format!(
            r#"
            INSERT INTO feedback_notes (student_id, note, created_by)
            VALUES ($1, $2, $3)
            RETURNING {NOTE_COLUMNS}
            "#
        ))
        .bind(student_id)
        .bind(note)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await
    }

    /// Lists a student's notes, newest first.
    pub async fn list_by_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<FeedbackNoteEntity>, sqlx::Error> {
        sqlx::query_as::<_, FeedbackNoteEntity>(&format!(
            r#"
            SELECT {NOTE_COLUMNS} FROM feedback_notes
            WHERE student_id = $1
            ORDER BY created_at DESC
            "#
        ))
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
    }
}
