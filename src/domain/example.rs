//! Example domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Example domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub id: i64,
    pub code: String,
    pub example: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
    /// Soft delete timestamp (None = active, Some = deleted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_by: Option<String>,
    pub uuid: Uuid,
}

impl Example {
    /// Check if the example is active (not deleted)
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// Example creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateExample {
    #[validate(length(min = 1, max = 50, message = "Code must be between 1 and 50 characters"))]
    pub code: String,
    #[validate(length(min = 1, message = "Example is required"))]
    pub example: String,
}

/// Example update data transfer object
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateExample {
    #[validate(length(min = 1, max = 50, message = "Code must be between 1 and 50 characters"))]
    pub code: Option<String>,
    #[validate(length(min = 1, message = "Example is required"))]
    pub example: Option<String>,
}

impl UpdateExample {
    pub fn is_empty(&self) -> bool {
        self.code.is_none() && self.example.is_none()
    }
}

/// Example response (what the CLI prints)
#[derive(Debug, Clone, Serialize)]
pub struct ExampleResponse {
    pub id: i64,
    pub uuid: Uuid,
    pub code: String,
    pub example: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

impl From<Example> for ExampleResponse {
    fn from(example: Example) -> Self {
        Self {
            id: example.id,
            uuid: example.uuid,
            code: example.code,
            example: example.example,
            created_at: example.created_at,
            created_by: example.created_by,
            updated_at: example.updated_at,
            updated_by: example.updated_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_example_validation() {
        let ok = CreateExample {
            code: "EX-1".to_string(),
            example: "first".to_string(),
        };
        assert!(ok.validate().is_ok());

        let empty_code = CreateExample {
            code: String::new(),
            example: "first".to_string(),
        };
        assert!(empty_code.validate().is_err());

        let long_code = CreateExample {
            code: "x".repeat(51),
            example: "first".to_string(),
        };
        assert!(long_code.validate().is_err());
    }

    #[test]
    fn test_update_example_skips_missing_fields() {
        let update = UpdateExample {
            code: None,
            example: Some("changed".to_string()),
        };
        assert!(update.validate().is_ok());
        assert!(!update.is_empty());
        assert!(UpdateExample::default().is_empty());

        let blank = UpdateExample {
            code: Some(String::new()),
            example: None,
        };
        assert!(blank.validate().is_err());
    }
}
