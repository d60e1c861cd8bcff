use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use super::Payload;
use crate::error::IssueError;
use crate::models::*;
use crate::store::IssueStore;

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Projects
// ============================================================

/// Names of projects that have held at least one issue.
pub async fn list_projects(State(store): State<IssueStore>) -> Json<Vec<String>> {
    Json(store.project_names())
}

// ============================================================
// Issues
// ============================================================

/// Every query parameter is an exact-match filter, applied in the order given.
pub async fn list_issues(
    State(store): State<IssueStore>,
    Path(project): Path<String>,
    Query(filters): Query<Vec<(String, String)>>,
) -> Json<Vec<Issue>> {
    Json(store.list_issues(&project, &filters))
}

pub async fn create_issue(
    State(store): State<IssueStore>,
    Path(project): Path<String>,
    Payload(input): Payload<CreateIssueInput>,
) -> Result<Json<Issue>, IssueError> {
    store.create_issue(&project, input).map(Json)
}

pub async fn update_issue(
    State(store): State<IssueStore>,
    Path(project): Path<String>,
    Payload(input): Payload<UpdateIssueInput>,
) -> Result<Json<ActionResponse>, IssueError> {
    store
        .update_issue(&project, input)
        .map(|issue| Json(ActionResponse::updated(issue.id.to_string())))
}

pub async fn delete_issue(
    State(store): State<IssueStore>,
    Path(project): Path<String>,
    Payload(input): Payload<DeleteIssueInput>,
) -> Result<Json<ActionResponse>, IssueError> {
    store
        .delete_issue(&project, input)
        .map(|issue| Json(ActionResponse::deleted(issue.id.to_string())))
}
