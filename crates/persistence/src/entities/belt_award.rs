//! Belt award entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::BeltAwardResponse;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the belt_awards table.
#[derive(Debug, Clone, FromRow)]
pub struct BeltAwardEntity {
    pub id: Uuid,
    pub student_id: Uuid,
    pub belt: String,
    pub awarded_by: Option<Uuid>,
    pub awarded_at: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<BeltAwardEntity> for BeltAwardResponse {
    fn from(entity: BeltAwardEntity) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            belt: entity.belt,
            awarded_by: entity.awarded_by,
            awarded_at: entity.awarded_at,
            created_at: entity.created_at,
        }
    }
}
