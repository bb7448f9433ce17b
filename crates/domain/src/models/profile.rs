//! Profile domain models.
//!
//! A profile is the durable identity record for any person in the system;
//! its id is shared with the external auth identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Role of a profile within the franchise hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Hq,
    FranchiseOwner,
    Instructor,
    Student,
    Parent,
}

impl Role {
    /// Parse a role from its wire form.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "hq" => Some(Role::Hq),
            "franchise_owner" => Some(Role::FranchiseOwner),
            "instructor" => Some(Role::Instructor),
            "student" => Some(Role::Student),
            "parent" => Some(Role::Parent),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Hq => write!(f, "hq"),
            Role::FranchiseOwner => write!(f, "franchise_owner"),
            Role::Instructor => write!(f, "instructor"),
            Role::Student => write!(f, "student"),
            Role::Parent => write!(f, "parent"),
        }
    }
}

/// Profile in API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ProfileResponse {
    pub id: Uuid,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub franchise_id: Option<Uuid>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request to update a profile's display name.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub full_name: String,
}

/// Query parameters for listing profiles under a franchise.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub struct ListProfilesQuery {
    /// Filter by role wire form ("instructor", "student", ...).
    pub role: Option<String>,
}

impl ListProfilesQuery {
    pub fn role_filter(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_roundtrip() {
        for role in [
            Role::Hq,
            Role::FranchiseOwner,
            Role::Instructor,
            Role::Student,
            Role::Parent,
        ] {
            assert_eq!(Role::parse(&role.to_string()), Some(role));
        }
    }

    #[test]
    fn test_role_parse_unknown() {
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("Instructor"), None);
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&Role::FranchiseOwner).unwrap(),
            "\"franchise_owner\""
        );
        assert_eq!(serde_json::to_string(&Role::Hq).unwrap(), "\"hq\"");
    }

    #[test]
    fn test_update_profile_request_validation() {
        let valid = UpdateProfileRequest {
            full_name: "Jane Doe".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty = UpdateProfileRequest {
            full_name: String::new(),
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_list_profiles_query_role_filter() {
        let query = ListProfilesQuery {
            role: Some("instructor".to_string()),
        };
        assert_eq!(query.role_filter(), Some(Role::Instructor));

        let bad = ListProfilesQuery {
            role: Some("ninja".to_string()),
        };
        assert_eq!(bad.role_filter(), None);
    }
}
