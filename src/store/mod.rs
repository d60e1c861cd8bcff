use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::IssueError;
use crate::models::*;

type Projects = HashMap<String, Vec<Issue>>;

/// In-memory issue storage, keyed by project name.
///
/// Cloning yields another handle to the same projects. Each operation holds
/// the lock for its whole read-modify-write, so concurrent requests never
/// observe a half-applied change.
#[derive(Clone, Default)]
pub struct IssueStore {
    projects: Arc<Mutex<Projects>>,
}

impl IssueStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Projects> {
        self.projects.lock().expect("issue store lock poisoned")
    }

    // ============================================================
    // Projects
    // ============================================================

    /// Names of every project that has ever held an issue, sorted.
    pub fn project_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().keys().cloned().collect();
        names.sort();
        names
    }

    // ============================================================
    // Issue operations
    // ============================================================

    /// Issues of `project` in insertion order, keeping only those that match
    /// every `(field, value)` filter. An unknown project yields no issues.
    pub fn list_issues(&self, project: &str, filters: &[(String, String)]) -> Vec<Issue> {
        let projects = self.lock();
        let Some(issues) = projects.get(project) else {
            return Vec::new();
        };

        issues
            .iter()
            .filter(|issue| {
                filters
                    .iter()
                    .all(|(field, value)| issue.matches(field, value))
            })
            .cloned()
            .collect()
    }

    pub fn create_issue(
        &self,
        project: &str,
        input: CreateIssueInput,
    ) -> Result<Issue, IssueError> {
        let (Some(issue_title), Some(issue_text), Some(created_by)) = (
            non_empty(input.issue_title),
            non_empty(input.issue_text),
            non_empty(input.created_by),
        ) else {
            return Err(IssueError::RequiredFieldsMissing);
        };

        let issue = Issue::new(
            issue_title,
            issue_text,
            created_by,
            input.assigned_to,
            input.status_text,
        );

        self.lock()
            .entry(project.to_string())
            .or_default()
            .push(issue.clone());

        tracing::debug!(project, id = %issue.id, "created issue");
        Ok(issue)
    }

    /// Apply the fields of `input` to the issue it names and return the
    /// updated issue.
    pub fn update_issue(
        &self,
        project: &str,
        input: UpdateIssueInput,
    ) -> Result<Issue, IssueError> {
        let Some(id) = non_empty(input.id.clone()) else {
            return Err(IssueError::MissingId);
        };

        let patch = input.patch();
        if patch.is_empty() {
            return Err(IssueError::NoUpdateFields { id });
        }

        let mut projects = self.lock();
        let Some(issue) = projects
            .get_mut(project)
            .and_then(|issues| issues.iter_mut().find(|issue| issue.has_id(&id)))
        else {
            return Err(IssueError::CouldNotUpdate { id });
        };

        issue.update(&patch);
        tracing::debug!(project, id = %issue.id, fields = patch.len(), "updated issue");
        Ok(issue.clone())
    }

    /// Remove the issue `input` names and return it.
    pub fn delete_issue(
        &self,
        project: &str,
        input: DeleteIssueInput,
    ) -> Result<Issue, IssueError> {
        let Some(id) = non_empty(input.id) else {
            return Err(IssueError::MissingId);
        };

        let mut projects = self.lock();
        let Some(issues) = projects.get_mut(project) else {
            return Err(IssueError::CouldNotDelete { id });
        };
        let Some(index) = issues.iter().position(|issue| issue.has_id(&id)) else {
            return Err(IssueError::CouldNotDelete { id });
        };

        let issue = issues.remove(index);
        tracing::debug!(project, id = %issue.id, "deleted issue");
        Ok(issue)
    }
}

/// Treat an empty string the same as an absent value.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
