use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::editor::EditError;
use crate::extraction::{ExtractError, USER_FACING_MESSAGE};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Store failures never appear here: the store swallows and logs its own
/// errors, degrading to absent/no-op per its contract.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    OutOfRange(#[from] EditError),

    #[error("An extraction is already in progress")]
    ExtractionInFlight,

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Invalid email address. Access denied.".to_string(),
            ),
            AppError::OutOfRange(e) => {
                // Out-of-range editor calls indicate a bug in the caller's
                // sequencing, not user error. Logged loudly, answered
                // without crashing the session.
                tracing::warn!("editor contract violation: {e}");
                (StatusCode::BAD_REQUEST, "OUT_OF_RANGE", e.to_string())
            }
            AppError::ExtractionInFlight => (
                StatusCode::CONFLICT,
                "EXTRACTION_IN_FLIGHT",
                "An extraction is already in progress for this session.".to_string(),
            ),
            AppError::Extraction(e) => {
                tracing::error!("extraction failed: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_FAILED",
                    USER_FACING_MESSAGE.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
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
