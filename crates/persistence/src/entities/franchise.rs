//! Franchise entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::FranchiseResponse;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the franchises table.
#[derive(Debug, Clone, FromRow)]
pub struct FranchiseEntity {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<FranchiseEntity> for FranchiseResponse {
    fn from(entity: FranchiseEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            owner_id: entity.owner_id,
            created_at: entity.created_at,
        }
    }
}
