//! Belt award domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request to award a belt to a student.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct AwardBeltRequest {
    #[validate(length(min = 1, max = 50, message = "Belt must be 1-50 characters"))]
    pub belt: String,

    /// Profile id of the awarding instructor/owner.
    pub awarded_by: Option<Uuid>,

    /// Award date; defaults to today when omitted.
    pub awarded_at: Option<NaiveDate>,
}

/// Belt award in API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BeltAwardResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub belt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awarded_by: Option<Uuid>,
    pub awarded_at: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_belt_request_validation() {
        let valid = AwardBeltRequest {
            belt: "yellow".to_string(),
            awarded_by: None,
            awarded_at: None,
        };
        assert!(valid.validate().is_ok());

        let empty = AwardBeltRequest {
            belt: String::new(),
            awarded_by: None,
            awarded_at: None,
        };
        assert!(empty.validate().is_err());
    }
}
