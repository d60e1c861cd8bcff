use axum::{
    extract::rejection::{BytesRejection, FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::IssueError;
use crate::models::ErrorResponse;

/// A request body that could not be read as issue fields.
///
/// Unlike [`IssueError`], these are transport failures and carry a 4xx
/// status.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unsupported content type: {0}")]
    UnsupportedMediaType(String),

    #[error("invalid request body: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Form(#[from] FormRejection),

    #[error(transparent)]
    Body(#[from] BytesRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::Json(rejection) => rejection.status(),
            Self::Form(rejection) => rejection.status(),
            Self::Body(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, "Rejected request body: {}", self);

        let body = ErrorResponse {
            error: self.to_string(),
            id: None,
        };
        (status, Json(body)).into_response()
    }
}

/// Business-rule failures are reported with a 200 status and an `error`
/// field, alongside the `_id` the client sent when there was one.
impl IntoResponse for IssueError {
    fn into_response(self) -> Response {
        tracing::debug!("Issue request rejected: {}", self);
        (StatusCode::OK, Json(ErrorResponse::from(&self))).into_response()
    }
}
