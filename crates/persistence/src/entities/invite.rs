//! Instructor invite entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::invite::{InviteStatus, InviteSummary};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for invite_status that maps to the PostgreSQL enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "invite_status", rename_all = "lowercase")]
pub enum InviteStatusDb {
    Pending,
    Active,
    Inactive,
    Expired,
}

impl From<InviteStatusDb> for InviteStatus {
    fn from(db_status: InviteStatusDb) -> Self {
        match db_status {
            InviteStatusDb::Pending => InviteStatus::Pending,
            InviteStatusDb::Active => InviteStatus::Active,
            InviteStatusDb::Inactive => InviteStatus::Inactive,
            InviteStatusDb::Expired => InviteStatus::Expired,
        }
    }
}

impl From<InviteStatus> for InviteStatusDb {
    fn from(status: InviteStatus) -> Self {
        match status {
            InviteStatus::Pending => InviteStatusDb::Pending,
            InviteStatus::Active => InviteStatusDb::Active,
            InviteStatus::Inactive => InviteStatusDb::Inactive,
            InviteStatus::Expired => InviteStatusDb::Expired,
        }
    }
}

/// Database row mapping for the instructor_invites table.
#[derive(Debug, Clone, FromRow)]
pub struct InstructorInviteEntity {
    pub id: Uuid,
    pub franchise_id: Uuid,
    pub invited_by: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub status: InviteStatusDb,
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl InstructorInviteEntity {
    /// Whether the completion webhook may act on this invite.
    pub fn is_completable(&self) -> bool {
        InviteStatus::from(self.status).is_completable()
    }

    /// Whether this invite blocks a new invite for the same email.
    pub fn is_open(&self) -> bool {
        InviteStatus::from(self.status).is_open()
    }
}

impl From<InstructorInviteEntity> for InviteSummary {
    fn from(entity: InstructorInviteEntity) -> Self {
        Self {
            id: entity.id,
            franchise_id: entity.franchise_id,
            invited_by: entity.invited_by,
            email: entity.email,
            full_name: entity.full_name,
            status: entity.status.into(),
            created_at: entity.created_at,
            completed_at: entity.completed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_invite(status: InviteStatusDb) -> InstructorInviteEntity {
        InstructorInviteEntity {
            id: Uuid::new_v4(),
            franchise_id: Uuid::new_v4(),
            invited_by: Uuid::new_v4(),
            email: "invitee@example.com".to_string(),
            full_name: Some("Invitee Person".to_string()),
            status,
            token: "a".repeat(48),
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    #[test]
    fn test_is_completable() {
        assert!(create_test_invite(InviteStatusDb::Pending).is_completable());
        assert!(create_test_invite(InviteStatusDb::Active).is_completable());
        assert!(!create_test_invite(InviteStatusDb::Inactive).is_completable());
    }

    #[test]
    fn test_is_open() {
        assert!(create_test_invite(InviteStatusDb::Pending).is_open());
        assert!(create_test_invite(InviteStatusDb::Active).is_open());
        assert!(!create_test_invite(InviteStatusDb::Inactive).is_open());
        assert!(!create_test_invite(InviteStatusDb::Expired).is_open());
    }

    #[test]
    fn test_status_conversion_roundtrip() {
        for status in [
            InviteStatus::Pending,
            InviteStatus::Active,
            InviteStatus::Inactive,
            InviteStatus::Expired,
        ] {
            let db: InviteStatusDb = status.into();
            let back: InviteStatus = db.into();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn test_into_summary() {
        let entity = create_test_invite(InviteStatusDb::Pending);
        let id = entity.id;
        let summary: InviteSummary = entity.into();
        assert_eq!(summary.id, id);
        assert_eq!(summary.status, InviteStatus::Pending);
        assert_eq!(summary.email, "invitee@example.com");
    }
}
