//! Student entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::StudentResponse;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the students table.
#[derive(Debug, Clone, FromRow)]
pub struct StudentEntity {
    pub id: Uuid,
    pub franchise_id: Uuid,
    pub user_id: Option<Uuid>,
    pub full_name: String,
    pub email: Option<String>,
    pub avatar_path: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Student row joined with the latest belt award.
#[derive(Debug, Clone, FromRow)]
pub struct StudentWithBeltEntity {
    pub id: Uuid,
    pub franchise_id: Uuid,
    pub user_id: Option<Uuid>,
    pub full_name: String,
    pub email: Option<String>,
    pub avatar_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub current_belt: Option<String>,
    pub last_belt_awarded_at: Option<NaiveDate>,
}

impl From<StudentEntity> for StudentResponse {
    fn from(entity: StudentEntity) -> Self {
        Self {
            id: entity.id,
            franchise_id: entity.franchise_id,
            user_id: entity.user_id,
            full_name: entity.full_name,
            email: entity.email,
            current_belt: None,
            last_belt_awarded_at: None,
            created_at: entity.created_at,
        }
    }
}

impl From<StudentWithBeltEntity> for StudentResponse {
    fn from(entity: StudentWithBeltEntity) -> Self {
        Self {
            id: entity.id,
            franchise_id: entity.franchise_id,
            user_id: entity.user_id,
            full_name: entity.full_name,
            email: entity.email,
            current_belt: entity.current_belt,
            last_belt_awarded_at: entity.last_belt_awarded_at,
            created_at: entity.created_at,
        }
    }
}
