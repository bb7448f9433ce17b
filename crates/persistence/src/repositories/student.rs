//! Repository for student database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{StudentEntity, StudentWithBeltEntity};
use shared::validation::normalize_email;

const STUDENT_COLUMNS: &str =
    "id, franchise_id, user_id, full_name, email, avatar_path, created_at";

/// Repository for student operations.
#[derive(Clone)]
pub struct StudentRepository {
    pool: PgPool,
}

impl StudentRepository {
    /// Creates a new student repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new student.
    pub async fn create(
        &self,
        franchise_id: Uuid,
        user_id: Option<Uuid>,
        full_name: &str,
        email: Option<&str>,
    ) -> Result<StudentEntity, sqlx::Error> {
        sqlx::query_as::<_, StudentEntity>(&format!(
            r#"
            INSERT INTO students (franchise_id, user_id, full_name, email)
            VALUES ($1, $2, $3, $4)
            RETURNING {STUDENT_COLUMNS}
            "#
        ))
        .bind(franchise_id)
        .bind(user_id)
        .bind(full_name)
        .bind(email.map(normalize_email))
        .fetch_one(&self.pool)
        .await
    }

    /// Finds a student by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<StudentEntity>, sqlx::Error> {
        sqlx::query_as::<_, StudentEntity>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Lists students for a franchise joined with their latest belt award.
    pub async fn list_by_franchise(
        &self,
        franchise_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<StudentWithBeltEntity>, sqlx::Error> {
        sqlx::query_as::<_, StudentWithBeltEntity>(
            r#"
            SELECT s.id, s.franchise_id, s.user_id, s.full_name, s.email, s.avatar_path,
                   s.created_at, latest.belt AS current_belt,
                   latest.awarded_at AS last_belt_awarded_at
            FROM students s
            LEFT JOIN LATERAL (
                SELECT b.belt, b.awarded_at FROM belt_awards b
                WHERE b.student_id = s.id
                ORDER BY b.awarded_at DESC, b.created_at DESC
                LIMIT 1
            ) latest ON TRUE
            WHERE s.franchise_id = $1
            ORDER BY s.full_name
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(franchise_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    /// Counts students in a franchise.
    pub async fn count_by_franchise(&self, franchise_id: Uuid) -> Result<i64, sqlx::Error> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM students WHERE franchise_id = $1")
                .bind(franchise_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Updates name and/or email; untouched fields keep their value.
    pub async fn update(
        &self,
        id: Uuid,
        full_name: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<StudentEntity>, sqlx::Error> {
        sqlx::query_as::<_, StudentEntity>(&format!(
            r#"
            UPDATE students
            SET full_name = COALESCE($2, full_name), email = COALESCE($3, email)
            WHERE id = $1
            RETURNING {STUDENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(full_name)
        .bind(email.map(normalize_email))
        .fetch_optional(&self.pool)
        .await
    }

    /// Records where the student's avatar lives in the object store.
    pub async fn set_avatar_path(&self, id: Uuid, path: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE students SET avatar_path = $2 WHERE id = $1")
            .bind(id)
            .bind(path)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a student; belt awards and notes cascade.
    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
