use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::document::ExtractionError;
use crate::llm_client::LlmError;
use crate::report::RenderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    MissingInput(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Extraction(#[from] ExtractionError),

    #[error("{0}")]
    Request(#[from] LlmError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The single message shown to users for any failed feedback request.
    pub fn user_message(&self) -> String {
        format!("Error: {self}")
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::MissingInput(_) => (StatusCode::BAD_REQUEST, "MISSING_INPUT"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Extraction(_) => (StatusCode::UNPROCESSABLE_ENTITY, "EXTRACTION_ERROR"),
            AppError::Request(_) => (StatusCode::BAD_GATEWAY, "REQUEST_ERROR"),
            AppError::Render(_) => (StatusCode::INTERNAL_SERVER_ERROR, "RENDER_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// Logs the failure at a level matching who is at fault.
    pub fn log(&self) {
        match self {
            AppError::MissingInput(msg) | AppError::Validation(msg) => {
                tracing::warn!("Rejected feedback request: {msg}")
            }
            AppError::Extraction(e) => tracing::warn!("Resume extraction failed: {e}"),
            AppError::Request(e) => tracing::error!("Completion request failed: {e}"),
            AppError::Render(e) => tracing::error!("Report rendering failed: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let (status, code) = self.status_and_code();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.user_message()
            }
        }));

        (status, body).into_response()
    }
}
