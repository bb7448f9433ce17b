//! Repository for belt award database operations.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::BeltAwardEntity;

const BELT_AWARD_COLUMNS: &str = "id, student_id, belt, awarded_by, awarded_at, created_at";

/// Repository for belt award operations.
#[derive(Clone)]
pub struct BeltAwardRepository {
    pool: PgPool,
}

impl BeltAwardRepository {
    /// Creates a new belt award repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Records a belt award; `awarded_at` defaults to today.
    pub async fn create(
        &self,
        student_id: Uuid,
        belt: &str,
        awarded_by: Option<Uuid>,
        awarded_at: Option<NaiveDate>,
    ) -> Result<BeltAwardEntity, sqlx::Error> {
        sqlx::query_as::<_, BeltAwardEntity>(&format!(
            r#"
            INSERT INTO belt_awards (student_id, belt, awarded_by, awarded_at)
            VALUES ($1, $2, $3, COALESCE($4, CURRENT_DATE))
            RETURNING {BELT_AWARD_COLUMNS}
            "#
        ))
        .bind(student_id)
        .bind(belt)
        .bind(awarded_by)
        .bind(awarded_at)
        .fetch_one(&self.pool)
        .await
    }

    /// Lists a student's belt awards, newest first.
    pub async fn list_by_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<BeltAwardEntity>, sqlx::Error> {
        sqlx::query_as::<_, BeltAwardEntity>(&format!(
            r#"
            SELECT {BELT_AWARD_COLUMNS} FROM belt_awards
            WHERE student_id = $1
            ORDER BY awarded_at DESC, created_at DESC
            "#
        ))
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
    }
}
