//! Feedback note domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request to add a feedback note to a student.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct AddFeedbackNoteRequest {
    #[validate(length(min = 1, max = 2000, message = "Note must be 1-2000 characters"))]
    pub note: String,

    /// Profile id of the author.
    pub created_by: Option<Uuid>,
}

/// Feedback note in API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FeedbackNoteResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_feedback_note_request_validation() {
        let valid = AddFeedbackNoteRequest {
            note: "Great focus this week".to_string(),
            created_by: Some(Uuid::new_v4()),
        };
        assert!(valid.validate().is_ok());

        let empty = AddFeedbackNoteRequest {
            note: String::new(),
            created_by: None,
        };
        assert!(empty.validate().is_err());
    }
}
