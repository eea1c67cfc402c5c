//! Application error type mapping to HTTP status codes and error bodies.
//!
//! Error responses have the shape:
//!
//! ```json
//! { "error": { "code": "VALIDATION_ERROR", "message": "...",
//!              "fields": [{"field": "title", "message": "must not be empty"}] } }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use taskdeck_types::error::TaskError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Task domain errors.
    Task(TaskError),
    /// Generic internal error.
    Internal(String),
}

impl From<TaskError> for AppError {
    fn from(e: TaskError) -> Self {
        AppError::Task(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, fields) = match self {
            AppError::Task(TaskError::NotFound) => (
                StatusCode::NOT_FOUND,
                "TASK_NOT_FOUND",
                "Task not found".to_string(),
                None,
            ),
            AppError::Task(TaskError::Validation(violations)) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Validation failed".to_string(),
                Some(violations),
            ),
            AppError::Task(TaskError::Storage(msg)) => {
                tracing::error!(error = %msg, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Storage failure".to_string(),
                    None,
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    msg,
                    None,
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message,
        });
        if let Some(fields) = fields {
            error["fields"] = json!(fields);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
