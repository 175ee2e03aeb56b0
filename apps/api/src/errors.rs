use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No file uploaded.")]
    MissingInput,

    #[error("Could not extract text from file.")]
    UnsupportedOrEmptyContent,

    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid multipart request: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingInput
            | AppError::UnsupportedOrEmptyContent
            | AppError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Multipart(e) => (e.status(), self.to_string()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_is_bad_request() {
        let response = AppError::MissingInput.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(AppError::MissingInput.to_string(), "No file uploaded.");
        assert_eq!(
            AppError::UnsupportedOrEmptyContent.to_string(),
            "Could not extract text from file."
        );
        assert_eq!(
            AppError::InvalidInput("empty section report".into()).to_string(),
            "empty section report"
        );
    }

    #[test]
    fn test_internal_error_hides_details() {
        let response = AppError::Internal(anyhow::anyhow!("worker panicked")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
