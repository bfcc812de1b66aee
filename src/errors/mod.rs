//! Unified error handling with a consistent API error body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application error type mapping to HTTP status codes.
///
/// Each variant corresponds to one stage of the scan pipeline, so a
/// failure response tells the caller which stage gave up.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Content extraction failed: {0}")]
    Extraction(String),

    #[error("Summarization failed: {0}")]
    Summarization(String),

    #[error("Unexpected response format from model: {0}")]
    ResponseFormat(String),
}

impl AppError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Fetch { .. }
            | AppError::Extraction(_)
            | AppError::Summarization(_)
            | AppError::ResponseFormat(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(error = %message, "Scan failed");
        } else {
            tracing::warn!(error = %message, "Rejected request");
        }

        let body = ErrorBody { error: message };
        (status, Json(body)).into_response()
    }
}
