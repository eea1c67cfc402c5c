//! JSON body extractor that maps rejections to validation errors.
//!
//! The stock `axum::Json` rejection answers 422 for deserialization
//! failures; a payload missing a required field must surface as a 400
//! validation error instead.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use taskdeck_types::error::{FieldViolation, TaskError};

use crate::http::error::AppError;

/// JSON request body, rejected as `VALIDATION_ERROR` (400) on parse failure.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(ValidJson(value)),
            Err(rejection) => Err(AppError::Task(TaskError::Validation(vec![
                FieldViolation::new("body", rejection.body_text()),
            ]))),
        }
    }
}
