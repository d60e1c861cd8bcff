use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::issue::value_text;
use super::IssuePatch;

/// Input for creating an issue.
///
/// Every field is optional at the type level; the store rejects the request
/// when a required field is missing or empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateIssueInput {
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub issue_title: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub issue_text: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
}

/// Input for updating an issue: the target `_id` plus any fields to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateIssueInput {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Everything except `_id`, exactly as sent.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl UpdateIssueInput {
    /// The requested changes with empty values removed.
    pub fn patch(&self) -> IssuePatch {
        IssuePatch::from_fields(self.fields.clone())
    }
}

/// Input for deleting an issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteIssueInput {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
}

/// Read any JSON scalar as text, the same way updates store it. `null`
/// counts as absent.
fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|v| value_text(&v)))
}
