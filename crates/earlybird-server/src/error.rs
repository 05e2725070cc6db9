//! HTTP error types for the `earlybird` server.
//!
//! Maps workflow and store errors into HTTP responses. Every error
//! variant produces a JSON body with a machine-readable `error` field and
//! a human-readable `message`. Internal details are logged, never leaked.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use earlybird_core::error::SubmitError;
use earlybird_store::StoreError;

/// Application-level error returned from HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client sent invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The request raced an in-flight or unreset submission.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Internal error (store, notifier, etc.).
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "something went wrong — please try again in a moment".to_owned(),
                )
            }
        };

        let body = ErrorBody {
            error: error_type,
            message,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<SubmitError> for AppError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::MissingInformation
            | SubmitError::InvalidName
            | SubmitError::InvalidEmail => Self::BadRequest(err.to_string()),
            SubmitError::Busy => Self::Conflict(err.to_string()),
            SubmitError::Store(inner) => Self::Internal(inner.to_string()),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Internal(err.to_string())
    }
}
