use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use feeledger_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Every variant answers with HTTP 500 and a `{ "error": "..." }` body; the
/// dashboard only distinguishes success from failure. Validation messages
/// are passed through, storage faults are logged and sanitized.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `feeledger_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request could not be decoded (bad JSON, query string or path).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Core(core) => {
                tracing::warn!(error = %core, "Rejected fee record input");
                core.to_string()
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                "A storage error occurred".to_string()
            }
            AppError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Malformed request");
                msg.clone()
            }
        };

        let body = json!({ "error": message });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
