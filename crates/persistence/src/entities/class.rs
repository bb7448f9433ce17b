//! Class entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::ClassResponse;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the classes table.
#[derive(Debug, Clone, FromRow)]
pub struct ClassEntity {
    pub id: Uuid,
    pub franchise_id: Uuid,
    pub name: String,
    pub schedule: Option<String>,
    pub instructor_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<ClassEntity> for ClassResponse {
    fn from(entity: ClassEntity) -> Self {
        Self {
            id: entity.id,
            franchise_id: entity.franchise_id,
            name: entity.name,
            schedule: entity.schedule,
            instructor_id: entity.instructor_id,
            created_at: entity.created_at,
        }
    }
}
