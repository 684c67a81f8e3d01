//! API routes module

pub mod health;
pub mod products;

use axum::{routing::get, Router};
use axum_helpers::health_router;

use crate::state::AppState;

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Product API! Go to /api/products to see all products.";

async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

/// Routes nested under `/api`
///
/// Products are mounted as a service so that the whole prefix, including
/// paths no route matches, stays behind the API key layer.
pub fn routes(state: &AppState) -> Router {
    Router::new().nest_service("/products", products::router(state))
}

/// Unauthenticated routes served at the root
pub fn public_routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .merge(health_router(state.config.app))
        .merge(health::router(state.clone()))
}
