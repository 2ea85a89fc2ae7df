use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use extractor_client::{ExtractorError, GENERIC_FETCH_MESSAGE};

/// Shown inline when resolver validation fails; no upstream request is made.
pub const INVALID_IDENTIFIER_MESSAGE: &str =
    "Please paste a valid X/Twitter profile URL or username.";

/// Application error type that converts to HTTP responses
#[derive(Debug)]
pub enum AppError {
    /// Input failed resolver validation
    InvalidIdentifier,
    /// Extractor returned an error or was unreachable
    FetchFailure(String),
    /// Rasterization collaborator failed
    Rasterize(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidIdentifier => (
                StatusCode::BAD_REQUEST,
                INVALID_IDENTIFIER_MESSAGE.to_string(),
            ),
            AppError::FetchFailure(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Rasterize(msg) => {
                tracing::error!(error = %msg, "Rasterization failed");
                (StatusCode::BAD_GATEWAY, "Failed to export card".to_string())
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

impl From<ExtractorError> for AppError {
    fn from(e: ExtractorError) -> Self {
        match e {
            // Upstream messages are written for end users; pass them through
            ExtractorError::Upstream { message, .. } => AppError::FetchFailure(message),
            other => {
                tracing::error!(error = %other, "Extractor request failed");
                AppError::FetchFailure(GENERIC_FETCH_MESSAGE.to_string())
            }
        }
    }
}
