use std::borrow::Cow;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A tracked work item within a project.
///
/// Issues are created open, with `created_on == updated_on`. The identifier
/// and creation time never change; every accepted update refreshes
/// `updated_on`. The serialized form is the wire format, so field names
/// match the JSON keys clients send and filter on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,
    /// Empty when nobody is assigned.
    pub assigned_to: String,
    /// Free-form status line, empty by default.
    pub status_text: String,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
    pub open: bool,
}

/// The fields an update is allowed to write.
///
/// `_id`, `created_on` and `updated_on` are not listed, so a patch
/// naming them is ignored for those keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueField {
    IssueTitle,
    IssueText,
    CreatedBy,
    AssignedTo,
    StatusText,
    Open,
}

impl IssueField {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "issue_title" => Some(Self::IssueTitle),
            "issue_text" => Some(Self::IssueText),
            "created_by" => Some(Self::CreatedBy),
            "assigned_to" => Some(Self::AssignedTo),
            "status_text" => Some(Self::StatusText),
            "open" => Some(Self::Open),
            _ => None,
        }
    }
}

/// Field changes requested by an update.
///
/// Built from the raw request fields with empty strings removed: an empty
/// value means "leave unchanged", not "clear". Keys are kept even when they
/// do not name a mutable field so that emptiness reflects what the client
/// sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssuePatch(Map<String, Value>);

impl IssuePatch {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        fields.into_iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for IssuePatch {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .filter(|(_, value)| value.as_str() != Some(""))
                .collect(),
        )
    }
}

impl Issue {
    /// Create a new open issue. Required fields are validated by the store.
    pub fn new(
        issue_title: String,
        issue_text: String,
        created_by: String,
        assigned_to: Option<String>,
        status_text: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            issue_title,
            issue_text,
            created_by,
            assigned_to: assigned_to.unwrap_or_default(),
            status_text: status_text.unwrap_or_default(),
            created_on: now,
            updated_on: now,
            open: true,
        }
    }

    /// Apply a patch in place.
    ///
    /// Keys that are not mutable fields are skipped. `updated_on` is
    /// refreshed unconditionally.
    pub fn update(&mut self, patch: &IssuePatch) {
        for (key, value) in patch.iter() {
            let Some(field) = IssueField::from_str(key) else {
                continue;
            };
            match field {
                IssueField::IssueTitle => self.issue_title = value_text(value),
                IssueField::IssueText => self.issue_text = value_text(value),
                IssueField::CreatedBy => self.created_by = value_text(value),
                IssueField::AssignedTo => self.assigned_to = value_text(value),
                IssueField::StatusText => self.status_text = value_text(value),
                IssueField::Open => self.open = open_flag(value),
            }
        }
        self.updated_on = Utc::now().max(self.created_on);
    }

    /// Whether `raw` is exactly this issue's identifier as rendered on the wire.
    pub fn has_id(&self, raw: &str) -> bool {
        let mut buf = Uuid::encode_buffer();
        &*self.id.hyphenated().encode_lower(&mut buf) == raw
    }

    /// The wire text of a serialized field, or `None` if no such field exists.
    pub fn field_text(&self, name: &str) -> Option<Cow<'_, str>> {
        let text = match name {
            "_id" => Cow::Owned(self.id.to_string()),
            "issue_title" => Cow::Borrowed(self.issue_title.as_str()),
            "issue_text" => Cow::Borrowed(self.issue_text.as_str()),
            "created_by" => Cow::Borrowed(self.created_by.as_str()),
            "assigned_to" => Cow::Borrowed(self.assigned_to.as_str()),
            "status_text" => Cow::Borrowed(self.status_text.as_str()),
            "created_on" => Cow::Owned(timestamp_text(&self.created_on)),
            "updated_on" => Cow::Owned(timestamp_text(&self.updated_on)),
            "open" => Cow::Borrowed(if self.open { "true" } else { "false" }),
            _ => return None,
        };
        Some(text)
    }

    /// Exact-match test used by list filters. Unknown fields never match.
    pub fn matches(&self, field: &str, value: &str) -> bool {
        self.field_text(field).is_some_and(|text| text == value)
    }
}

// Same rendering chrono's serde impl produces.
fn timestamp_text(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Text stored for a JSON value sent in a text field.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// `"false"` is the only string that closes an issue; other values count by
/// truthiness so storage stays boolean.
fn open_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty() && s.as_str() != "false",
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::Null => false,
        Value::Array(_) | Value::Object(_) => true,
    }
}
