use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use validator::ValidationErrors;

/// Body message for every not-found outcome
pub const NOT_FOUND_MESSAGE: &str = "Task not found";

#[derive(Debug, Error)]
pub enum TaskError {
    /// The id (as received) does not resolve to a task
    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    /// `context` names the operation, e.g. "Error updating task"
    #[error("{context}: {message}")]
    Database {
        context: &'static str,
        message: String,
    },
}

impl TaskError {
    pub fn database(context: &'static str, err: sea_orm::DbErr) -> Self {
        TaskError::Database {
            context,
            message: err.to_string(),
        }
    }
}

pub type TaskResult<T> = Result<T, TaskError>;

/// Convert TaskError to AppError for standardized error responses
impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(_) => AppError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            TaskError::Validation(errors) => AppError::ValidationError(errors),
            TaskError::Database { context, message } => AppError::Database {
                message: context.to_string(),
                error: message,
            },
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
