//! API error type and its JSON rendering.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Body returned for every 500; the real cause only goes to the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Body returned for unknown routes.
pub const NOT_FOUND_MESSAGE: &str = "Not found";

/// Errors a handler can return.
///
/// Every variant renders as `{"error": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(jotpad_core::Error),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client.
    pub fn client_message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => msg,
            ApiError::Internal(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl From<jotpad_core::Error> for ApiError {
    fn from(err: jotpad_core::Error) -> Self {
        match err {
            jotpad_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            jotpad_core::Error::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(err) = &self {
            tracing::error!(subsystem = "api", error = %err, "Request failed");
        }

        let body = Json(serde_json::json!({
            "error": self.client_message(),
        }));

        (self.status_code(), body).into_response()
    }
}

/// Fallback for unmatched routes and methods.
pub async fn not_found() -> ApiError {
    ApiError::NotFound(NOT_FOUND_MESSAGE.to_string())
}

/// Response for a handler that panicked: the usual JSON 500.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(subsystem = "api", panic = %detail, "Handler panicked");

    let body = Json(serde_json::json!({
        "error": INTERNAL_ERROR_MESSAGE,
    }));
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}
