//! Student domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{BeltAwardResponse, FeedbackNoteResponse};

/// Request to enrol a student in a franchise.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub full_name: String,

    #[validate(length(max = 255, message = "Email must be at most 255 characters"))]
    pub email: Option<String>,

    /// Profile id of the student's own login, when one exists.
    pub user_id: Option<Uuid>,
}

/// Request to update a student record.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateStudentRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub full_name: Option<String>,

    #[validate(length(max = 255, message = "Email must be at most 255 characters"))]
    pub email: Option<String>,
}

/// Student in list responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StudentResponse {
    pub id: Uuid,
    pub franchise_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_belt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_belt_awarded_at: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Student detail: the record merged with its belt history and notes,
/// the shape the owner/instructor dashboards render in the detail panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StudentDetailResponse {
    #[serde(flatten)]
    pub student: StudentResponse,
    pub belt_awards: Vec<BeltAwardResponse>,
    pub feedback_notes: Vec<FeedbackNoteResponse>,
}

/// Query parameters for listing students.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub struct ListStudentsQuery {
    /// Page number (default: 1).
    pub page: Option<i64>,

    /// Items per page (default: 50, max: 100).
    pub per_page: Option<i64>,
}

impl ListStudentsQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn per_page(&self) -> i64 {
        self.per_page.unwrap_or(50).clamp(1, 100)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.per_page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_student_request_validation() {
        let valid = CreateStudentRequest {
            full_name: "Kim Lee".to_string(),
            email: Some("kim@x.com".to_string()),
            user_id: None,
        };
        assert!(valid.validate().is_ok());

        let empty_name = CreateStudentRequest {
            full_name: String::new(),
            email: None,
            user_id: None,
        };
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_list_students_query_defaults() {
        let query = ListStudentsQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.per_page(), 50);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_list_students_query_offset() {
        let query = ListStudentsQuery {
            page: Some(3),
            per_page: Some(20),
        };
        assert_eq!(query.offset(), 40);
    }
}
