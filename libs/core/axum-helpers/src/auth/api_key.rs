use super::config::ApiKeyConfig;
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use subtle::ConstantTimeEq;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Message returned for a missing or wrong key
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized: Invalid or missing API key";

/// Verifies the `x-api-key` header against the configured secret.
///
/// Cheap to clone; the secret is shared.
#[derive(Clone)]
pub struct ApiKeyAuth {
    secret: Arc<[u8]>,
}

impl ApiKeyAuth {
    pub fn new(config: &ApiKeyConfig) -> Self {
        Self {
            secret: Arc::from(config.key.as_bytes()),
        }
    }

    /// Returns true when the header is present and equals the secret byte for byte.
    ///
    /// The comparison is constant-time for equal-length inputs.
    pub fn verify(&self, headers: &HeaderMap) -> bool {
        match headers.get(API_KEY_HEADER) {
            Some(value) => value.as_bytes().ct_eq(&self.secret[..]).into(),
            None => false,
        }
    }
}

impl std::fmt::Debug for ApiKeyAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyAuth")
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// API key authentication middleware
///
/// Rejects the request with 401 before any extractor runs, so the body of an
/// unauthenticated request is never read.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use axum_helpers::auth::{ApiKeyAuth, ApiKeyConfig, api_key_auth_middleware};
///
/// let auth = ApiKeyAuth::new(&ApiKeyConfig::new("s3cret"));
///
/// let protected_routes = Router::new()
///     .route("/items", get(list_items))
///     .layer(axum::middleware::from_fn_with_state(auth, api_key_auth_middleware));
/// ```
pub async fn api_key_auth_middleware(
    State(auth): State<ApiKeyAuth>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !auth.verify(request.headers()) {
        tracing::debug!(
            method = %request.method(),
            path = %request.uri().path(),
            "Rejected request without a valid API key"
        );
        return Err(AppError::unauthorized(UNAUTHORIZED_MESSAGE));
    }

    Ok(next.run(request).await)
}
