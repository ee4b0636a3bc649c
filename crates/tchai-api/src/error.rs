//! Error types for tchai-api
//!
//! Every error renders as `{"error": "<message>"}`. Rejected input is a 400;
//! store faults are a 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tchai_core::{CoreError, ErrorSeverity, ValidationError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request body must be JSON")]
    MalformedRequest,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Core(e) => match e.severity() {
                ErrorSeverity::Warning => log::warn!(target: "tchai::error", "[{}] {}", e.code(), e),
                ErrorSeverity::Error | ErrorSeverity::Critical => {
                    log::error!(target: "tchai::error", "[{}] {}", e.code(), e)
                }
            },
            other => log::debug!(target: "tchai::error", "Rejected request: {}", other),
        }

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
