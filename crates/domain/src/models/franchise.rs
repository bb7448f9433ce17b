//! Franchise domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request to create a franchise (HQ dashboard action).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateFranchiseRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    /// Profile id of the owner, when one already exists.
    pub owner_id: Option<Uuid>,
}

/// Request to update a franchise.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateFranchiseRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    pub owner_id: Option<Uuid>,
}

/// Franchise in API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FranchiseResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_franchise_request_validation() {
        let valid = CreateFranchiseRequest {
            name: "North Dojo".to_string(),
            owner_id: None,
        };
        assert!(valid.validate().is_ok());

        let empty = CreateFranchiseRequest {
            name: String::new(),
            owner_id: None,
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_update_franchise_request_optional_name() {
        let none = UpdateFranchiseRequest {
            name: None,
            owner_id: Some(Uuid::new_v4()),
        };
        assert!(none.validate().is_ok());

        let bad = UpdateFranchiseRequest {
            name: Some(String::new()),
            owner_id: None,
        };
        assert!(bad.validate().is_err());
    }
}
