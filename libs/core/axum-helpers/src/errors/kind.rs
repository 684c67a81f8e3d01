//! Error kinds reported to API clients.
//!
//! The variant name is the client-facing identifier written to the `error`
//! field of every error body, so renaming a variant is a breaking API change.
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorKind;
//!
//! let kind = ErrorKind::NotFoundError;
//! assert_eq!(kind.as_ref(), "NotFoundError");
//! assert_eq!(kind.default_status().as_u16(), 404);
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// Kind of failure carried by an [`AppError`](super::AppError).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    ToSchema,
)]
pub enum ErrorKind {
    /// Referenced resource does not exist
    NotFoundError,

    /// Request payload or credentials were rejected
    ValidationError,

    /// Unexpected server-side failure
    InternalServerError,

    /// File system or socket I/O failure
    IoError,

    /// JSON serialization failure while building a response
    SerdeJsonError,
}

impl ErrorKind {
    /// Status code used when the error does not carry its own.
    pub fn default_status(&self) -> StatusCode {
        match self {
            Self::NotFoundError => StatusCode::NOT_FOUND,
            Self::ValidationError => StatusCode::BAD_REQUEST,
            Self::InternalServerError | Self::IoError | Self::SerdeJsonError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Human-readable fallback message.
    pub const fn default_message(&self) -> &'static str {
        match self {
            Self::NotFoundError => "Resource not found",
            Self::ValidationError => "Request validation failed",
            Self::InternalServerError => "An internal server error occurred",
            Self::IoError => "I/O error occurred",
            Self::SerdeJsonError => "JSON serialization error",
        }
    }

    /// Whether the failure is the server's fault (5xx).
    pub fn is_server_error(&self) -> bool {
        self.default_status().is_server_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_kind_names_match_variants() {
        assert_eq!(ErrorKind::NotFoundError.as_ref(), "NotFoundError");
        assert_eq!(ErrorKind::ValidationError.to_string(), "ValidationError");
        assert_eq!(
            ErrorKind::from_str("InternalServerError").unwrap(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_default_status() {
        assert_eq!(ErrorKind::NotFoundError.default_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorKind::ValidationError.default_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorKind::IoError.default_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_server_error_classification() {
        assert!(!ErrorKind::ValidationError.is_server_error());
        assert!(ErrorKind::SerdeJsonError.is_server_error());
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&ErrorKind::ValidationError).unwrap();
        assert_eq!(json, "\"ValidationError\"");
    }
}
