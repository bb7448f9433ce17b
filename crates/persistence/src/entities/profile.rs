//! Profile entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::profile::{ProfileResponse, Role};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for profile_role that maps to the PostgreSQL enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "profile_role", rename_all = "snake_case")]
pub enum RoleDb {
    Hq,
    FranchiseOwner,
    Instructor,
    Student,
    Parent,
}

impl From<RoleDb> for Role {
    fn from(db_role: RoleDb) -> Self {
        match db_role {
            RoleDb::Hq => Role::Hq,
            RoleDb::FranchiseOwner => Role::FranchiseOwner,
            RoleDb::Instructor => Role::Instructor,
            RoleDb::Student => Role::Student,
            RoleDb::Parent => Role::Parent,
        }
    }
}

impl From<Role> for RoleDb {
    fn from(role: Role) -> Self {
        match role {
            Role::Hq => RoleDb::Hq,
            Role::FranchiseOwner => RoleDb::FranchiseOwner,
            Role::Instructor => RoleDb::Instructor,
            Role::Student => RoleDb::Student,
            Role::Parent => RoleDb::Parent,
        }
    }
}

/// Database row mapping for the profiles table.
#[derive(Debug, Clone, FromRow)]
pub struct ProfileEntity {
    pub id: Uuid,
    pub role: RoleDb,
    pub franchise_id: Option<Uuid>,
    pub email: String,
    pub full_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ProfileEntity> for ProfileResponse {
    fn from(entity: ProfileEntity) -> Self {
        Self {
            id: entity.id,
            role: entity.role.into(),
            franchise_id: entity.franchise_id,
            email: entity.email,
            full_name: entity.full_name,
            created_at: entity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_conversion_roundtrip() {
        for role in [
            Role::Hq,
            Role::FranchiseOwner,
            Role::Instructor,
            Role::Student,
            Role::Parent,
        ] {
            let db: RoleDb = role.into();
            let back: Role = db.into();
            assert_eq!(back, role);
        }
    }

    #[test]
    fn test_into_response() {
        let entity = ProfileEntity {
            id: Uuid::new_v4(),
            role: RoleDb::Instructor,
            franchise_id: Some(Uuid::new_v4()),
            email: "jane@example.com".to_string(),
            full_name: Some("Jane Doe".to_string()),
            created_at: Utc::now(),
        };
        let id = entity.id;
        let response: ProfileResponse = entity.into();
        assert_eq!(response.id, id);
        assert_eq!(response.role, Role::Instructor);
    }
}
