pub mod codes;
pub mod handlers;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body returned for every non-validation failure.
///
/// ```json
/// { "message": "Error creating task", "error": "connection refused" }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable summary of what failed
    pub message: String,
    /// Underlying cause, when there is one worth reporting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: Some(error.into()),
        }
    }
}

/// One violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Body returned when a payload fails validation; lists every violation.
///
/// ```json
/// { "errors": [ { "field": "title", "message": "Title cannot be empty" } ] }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

impl From<&ValidationErrors> for ValidationErrorResponse {
    fn from(errors: &ValidationErrors) -> Self {
        let mut errors: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, violations)| {
                violations.iter().map(move |violation| FieldError {
                    field: field.to_string(),
                    message: violation
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| violation.code.to_string()),
                })
            })
            .collect();

        // field_errors() is a HashMap
        errors.sort_by(|a, b| a.field.cmp(&b.field));

        Self { errors }
    }
}

/// Application error type that renders as a JSON HTTP response.
///
/// Every variant is logged with its [`ErrorCode`] when converted.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Not Found: {0}")]
    NotFound(String),

    /// Datastore failure; `message` names the operation, `error` carries the
    /// datastore's own text.
    #[error("{message}: {error}")]
    Database { message: String, error: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::InvalidJson.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::with_error(
                        ErrorCode::InvalidJson.default_message(),
                        e.body_text(),
                    )),
                )
                    .into_response()
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {}",
                    e
                );
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorResponse::from(&e)),
                )
                    .into_response()
            }
            AppError::NotFound(message) => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    "Not found: {}",
                    message
                );
                (StatusCode::NOT_FOUND, Json(ErrorResponse::new(message))).into_response()
            }
            AppError::Database { message, error } => {
                tracing::error!(
                    error_code = ErrorCode::DatabaseError.code(),
                    "{}: {}",
                    message,
                    error
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::with_error(message, error)),
                )
                    .into_response()
            }
        }
    }
}
