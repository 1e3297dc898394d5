use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application error type that converts to HTTP responses
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Forbidden(String),
    /// The upstream data source is unreachable or answered with an error.
    /// Surfaced as 502 so an outage is never mistaken for "no data".
    Upstream(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::Upstream(msg) => {
                tracing::error!(error = %msg, "Upstream fetch failed");
                (StatusCode::BAD_GATEWAY, "Upstream service unavailable".into())
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

impl From<blog_api::BlogError> for AppError {
    fn from(e: blog_api::BlogError) -> Self {
        AppError::Upstream(e.to_string())
    }
}

impl From<github_api::GithubError> for AppError {
    fn from(e: github_api::GithubError) -> Self {
        AppError::Upstream(e.to_string())
    }
}
