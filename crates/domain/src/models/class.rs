//! Class domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request to create a class under a franchise.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateClassRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 255, message = "Schedule must be at most 255 characters"))]
    pub schedule: Option<String>,

    /// Primary instructor; must pass the assignability policy when set.
    pub instructor_id: Option<Uuid>,
}

/// Request to update a class.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateClassRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 255, message = "Schedule must be at most 255 characters"))]
    pub schedule: Option<String>,

    pub instructor_id: Option<Uuid>,
}

/// Class in API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ClassResponse {
    pub id: Uuid,
    pub franchise_id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_class_request_validation() {
        let valid = CreateClassRequest {
            name: "Little Dragons".to_string(),
            schedule: Some("Mon/Wed 16:00".to_string()),
            instructor_id: None,
        };
        assert!(valid.validate().is_ok());

        let empty = CreateClassRequest {
            name: String::new(),
            schedule: None,
            instructor_id: None,
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_update_class_request_all_optional() {
        let none = UpdateClassRequest {
            name: None,
            schedule: None,
            instructor_id: None,
        };
        assert!(none.validate().is_ok());
    }
}
