//! Repository for franchise database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::FranchiseEntity;

const FRANCHISE_COLUMNS: &str = "id, name, owner_id, created_at";

/// Repository for franchise operations.
#[derive(Clone)]
pub struct FranchiseRepository {
    pool: PgPool,
}

impl FranchiseRepository {
    /// Creates a new franchise repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new franchise.
    pub async fn create(
        &self,
        name: &str,
        owner_id: Option<Uuid>,
    ) -> Result<FranchiseEntity, sqlx::Error> {
        sqlx::query_as::<_, FranchiseEntity>(&format!(
            r#"
            INSERT INTO franchises (name, owner_id)
            VALUES ($1, $2)
            RETURNING {FRANCHISE_COLUMNS}
            "#
        ))
        .bind(name)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
    }

    /// Finds a franchise by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<FranchiseEntity>, sqlx::Error> {
        sqlx::query_as::<_, FranchiseEntity>(&format!(
            "SELECT {FRANCHISE_COLUMNS} FROM franchises WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Lists all franchises.
    pub async fn list(&self) -> Result<Vec<FranchiseEntity>, sqlx::Error> {
        sqlx::query_as::<_, FranchiseEntity>(&format!(
            "SELECT {FRANCHISE_COLUMNS} FROM franchises ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await
    }

    /// Updates name and/or owner; untouched fields keep their value.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        owner_id: Option<Uuid>,
    ) -> Result<Option<FranchiseEntity>, sqlx::Error> {
        sqlx::query_as::<_, FranchiseEntity>(&format!(
            r#"
            UPDATE franchises
            SET name = COALESCE($2, name), owner_id = COALESCE($3, owner_id)
            WHERE id = $1
            RETURNING {FRANCHISE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(name)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
    }
}
