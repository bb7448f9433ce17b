//! Repository for class database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ClassEntity;

const CLASS_COLUMNS: &str = "id, franchise_id, name, schedule, instructor_id, created_at";

/// Repository for class operations.
#[derive(Clone)]
pub struct ClassRepository {
    pool: PgPool,
}

impl ClassRepository {
    /// Creates a new class repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new class.
    pub async fn create(
        &self,
        franchise_id: Uuid,
        name: &str,
        schedule: Option<&str>,
        instructor_id: Option<Uuid>,
    ) -> Result<ClassEntity, sqlx::Error> {
        sqlx::query_as::<_, ClassEntity>(&format!(
            r#"
            INSERT INTO classes (franchise_id, name, schedule, instructor_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {CLASS_COLUMNS}
            "#
        ))
        .bind(franchise_id)
        .bind(name)
        .bind(schedule)
        .bind(instructor_id)
        .fetch_one(&self.pool)
        .await
    }

    /// Finds a class by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ClassEntity>, sqlx::Error> {
        sqlx::query_as::<_, ClassEntity>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Lists classes for a franchise.
    pub async fn list_by_franchise(
        &self,
        franchise_id: Uuid,
    ) -> Result<Vec<ClassEntity>, sqlx::Error> {
        sqlx::query_as::<_, ClassEntity>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE franchise_id = $1 ORDER BY name"
        ))
        .bind(franchise_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Updates class fields; untouched fields keep their value.
    ///
    /// `clear_instructor` removes the assignment outright, since COALESCE
    /// cannot express "set to NULL".
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        schedule: Option<&str>,
        instructor_id: Option<Uuid>,
        clear_instructor: bool,
    ) -> Result<Option<ClassEntity>, sqlx::Error> {
        sqlx::query_as::<_, ClassEntity>(&format!(
            r#"
            UPDATE classes
            SET name = COALESCE($2, name),
                schedule = COALESCE($3, schedule),
                instructor_id = CASE WHEN $5 THEN NULL ELSE COALESCE($4, instructor_id) END
            WHERE id = $1
            RETURNING {CLASS_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(name)
        .bind(schedule)
        .bind(instructor_id)
        .bind(clear_instructor)
        .fetch_optional(&self.pool)
        .await
    }

    /// Deletes a class.
    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
