pub mod handlers;
pub mod kind;
pub mod responses;

pub use kind::ErrorKind;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Every error leaving the API has this shape:
///
/// ```json
/// {
///   "error": "NotFoundError",
///   "message": "Product not found"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error kind name for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain crates convert their own errors into this type; the
/// [`IntoResponse`] impl is the single place where errors become HTTP.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    /// Rejected input. Authentication failures use this kind with 401.
    #[error("{message}")]
    Validation { message: String, status: StatusCode },

    #[error("{0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// 400 validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    /// 401 authentication failure, reported with the validation kind.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            status: StatusCode::UNAUTHORIZED,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFoundError,
            Self::Validation { .. } => ErrorKind::ValidationError,
            Self::SerdeJson(_) => ErrorKind::SerdeJsonError,
            Self::Io(_) => ErrorKind::IoError,
            Self::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { status, .. } => *status,
            other => other.kind().default_status(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error_kind = %kind, status = status.as_u16(), "{:?}", self);
        } else {
            tracing::info!(error_kind = %kind, status = status.as_u16(), "{}", self);
        }

        error_response(status, kind, self.to_string())
    }
}

/// Builds an error response without going through [`AppError`].
pub fn error_response(status: StatusCode, kind: ErrorKind, message: String) -> Response {
    let body = Json(ErrorResponse {
        error: kind.to_string(),
        message,
    });

    (status, body).into_response()
}
