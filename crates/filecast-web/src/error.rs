use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use filecast_core::CoreError;
use serde::Serialize;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Forbidden(String),
    NotADirectory,
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::NotADirectory => (StatusCode::BAD_REQUEST, "entry is not dir".to_string()),
            AppError::Internal(msg) => {
                // Log the real error server-side, return generic message to client
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = ErrorBody {
            success: false,
            error: message,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::NotFound(_) => AppError::NotFound(e.to_string()),
            CoreError::PermissionDenied(_) => AppError::Forbidden(e.to_string()),
            CoreError::NotADirectory(_) => AppError::NotADirectory,
            CoreError::Io(_) => AppError::Internal(e.to_string()),
        }
    }
}
