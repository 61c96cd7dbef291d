//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` and multipart failures to HTTP status codes and a
//! `{"message": ..., "status": ...}` body.

use axum::extract::multipart::MultipartError;
use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog_core::{CoreError, ImageError, RepositoryError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::NotFound(msg) | Self::BadRequest(msg) => msg,
            Self::Internal(msg) => {
                tracing::error!(target: "catalog.http", error = %msg, "Request failed");
                msg
            }
        };

        let body = ErrorBody {
            message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Image(image_err) => image_err.into(),
            CoreError::Validation(msg) => Self::BadRequest(msg),
            CoreError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::IndexOutOfRange(_) => Self::NotFound(err.to_string()),
            RepositoryError::Unavailable(msg) => Self::Internal(format!("Storage: {msg}")),
            RepositoryError::Corrupt(msg) => Self::Internal(format!("Corrupt catalog: {msg}")),
        }
    }
}

impl From<ImageError> for HttpError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::UnsupportedFormat(msg) | ImageError::PathInvalid(msg) => {
                Self::BadRequest(msg)
            }
            ImageError::Io(msg) => Self::Internal(format!("Image storage: {msg}")),
        }
    }
}

impl From<MultipartError> for HttpError {
    fn from(err: MultipartError) -> Self {
        Self::BadRequest(err.body_text())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
