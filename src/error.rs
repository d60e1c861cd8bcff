//! Business-rule failures reported back to clients.

use crate::models::ErrorResponse;

/// A request the store refused to apply.
///
/// The `Display` text is the message clients see in the `error` field.
/// None of these leave the store modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IssueError {
    #[error("required field(s) missing")]
    RequiredFieldsMissing,

    #[error("missing _id")]
    MissingId,

    #[error("no update field(s) sent")]
    NoUpdateFields { id: String },

    #[error("could not update")]
    CouldNotUpdate { id: String },

    #[error("could not delete")]
    CouldNotDelete { id: String },
}

impl IssueError {
    /// The issue identifier the rejected request referred to, if any.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::RequiredFieldsMissing | Self::MissingId => None,
            Self::NoUpdateFields { id }
            | Self::CouldNotUpdate { id }
            | Self::CouldNotDelete { id } => Some(id),
        }
    }
}

impl From<&IssueError> for ErrorResponse {
    fn from(err: &IssueError) -> Self {
        Self {
            error: err.to_string(),
            id: err.id().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id_body_has_no_id() {
        let body = ErrorResponse::from(&IssueError::MissingId);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "error": "missing _id" })
        );
    }

    #[test]
    fn not_found_body_echoes_id() {
        let body = ErrorResponse::from(&IssueError::CouldNotDelete {
            id: "leeloo".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "error": "could not delete", "_id": "leeloo" })
        );
    }
}
