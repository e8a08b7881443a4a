use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TareaError {
    #[error("Tarea not found: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type TareaResult<T> = Result<T, TareaError>;

/// Convert TareaError to AppError for standardized error responses
impl From<TareaError> for AppError {
    fn from(err: TareaError) -> Self {
        match err {
            TareaError::NotFound(id) => AppError::NotFound(format!("Tarea {} not found", id)),
            TareaError::Validation(msg) => AppError::BadRequest(msg),
            TareaError::Database(msg) => {
                AppError::InternalServerError(format!("Database error: {}", msg))
            }
            TareaError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for TareaError {
    fn into_response(self) -> Response {
        // Convert to AppError for the standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for TareaError {
    fn from(err: sea_orm::DbErr) -> Self {
        TareaError::Database(err.to_string())
    }
}
