use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures raised by an `InterviewStore` backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not connect to the database: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),

    #[error("insert failed: {0}")]
    Insert(#[source] sqlx::Error),

    /// The storage-level uniqueness constraint on contact names fired.
    #[error("contact name already stored")]
    UniqueViolation,
}

/// Why a submission was not created.
///
/// Every variant except `Store` is a business rejection that is shown to the
/// user as-is. `Store` is a system failure whose detail stays in the logs.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid interview date: {0}")]
    InvalidDate(String),

    #[error("duplicate contact: {0}")]
    DuplicateContact(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SubmissionError {
    /// True for rejections (bad input, duplicate), false for storage failures.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, SubmissionError::Store(_))
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TEMPLATE_ERROR",
                    "The page could not be rendered".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
