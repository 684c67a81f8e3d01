//! Products API routes

use axum::{middleware, Router};
use axum_helpers::{api_key_auth_middleware, errors::handlers::not_found};
use domain_products::handlers;

use crate::state::AppState;

/// Create products router
///
/// Every request below the mount point, matched or not, passes the API key
/// check first. Unknown paths and unsupported methods both answer with the
/// JSON 404 body.
pub fn router(state: &AppState) -> Router {
    handlers::router(state.products.clone())
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.auth.clone(),
            api_key_auth_middleware,
        ))
}
