use std::any::Any;

use axum::response::{IntoResponse, Response};

use super::{AppError, ErrorKind};

/// Message returned for requests that match no route
pub const ROUTE_NOT_FOUND: &str = "Route not found";

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    AppError::not_found(ROUTE_NOT_FOUND).into_response()
}

/// Converts a handler panic into the standard 500 body.
///
/// Intended for `tower_http::catch_panic::CatchPanicLayer::custom`. The panic
/// payload is logged; clients only see the generic message.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = %details, "Request handler panicked");

    AppError::internal(ErrorKind::InternalServerError.default_message()).into_response()
}
