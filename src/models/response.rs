use serde::{Deserialize, Serialize};

pub const RESULT_UPDATED: &str = "successfully updated";
pub const RESULT_DELETED: &str = "successfully deleted";

/// Body returned when an update or delete succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub result: String,
    #[serde(rename = "_id")]
    pub id: String,
}

impl ActionResponse {
    pub fn updated(id: impl Into<String>) -> Self {
        Self {
            result: RESULT_UPDATED.to_string(),
            id: id.into(),
        }
    }

    pub fn deleted(id: impl Into<String>) -> Self {
        Self {
            result: RESULT_DELETED.to_string(),
            id: id.into(),
        }
    }
}

/// Body returned when a request is rejected by a business rule.
///
/// `_id` echoes the identifier the client sent, when there was one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}
