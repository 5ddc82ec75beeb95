//! Axum-specific error types and mappings.
//!
//! Failures are always a status code plus a plain-text message. The message
//! is the text of the lowest-layer error, unchanged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tinywiki_core::{RenderError, RepositoryError};

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (malformed or missing client input).
    #[error("{0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// Internal server error (storage or render failure).
    #[error("{0}")]
    Internal(String),
}

impl HttpError {
    /// Map a failure while loading a page: absence is a 404, anything else a 500.
    pub fn from_load(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => Self::NotFound(msg),
            other => Self::Internal(other.to_string()),
        }
    }

    /// Map a failure while writing or listing: always a 500.
    pub fn from_storage(err: RepositoryError) -> Self {
        Self::Internal(err.to_string())
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RenderError> for HttpError {
    fn from(err: RenderError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        (status, self.to_string()).into_response()
    }
}
