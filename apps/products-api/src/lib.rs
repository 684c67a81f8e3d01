//! Products API
//!
//! REST service over an in-memory product catalog.
//!
//! ## Architecture
//!
//! ```text
//! Client
//!   ↓ (HTTP, x-api-key on /api/products*)
//! axum Router (api/)          trace, CORS, security headers, compression
//!   ↓
//! ProductService (domain_products)
//!   ↓
//! InMemoryProductRepository
//! ```
//!
//! ## Modules
//!
//! - `api`: route tables (welcome, health, readiness, products)
//! - `config`: environment configuration
//! - `openapi`: generated API documentation
//! - `state`: shared application state

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use std::io;

pub use config::Config;
pub use state::AppState;

/// Builds the complete application router: docs, public routes and the
/// authenticated product API, with the shared middleware stack.
pub async fn app(state: &AppState) -> io::Result<Router> {
    axum_helpers::create_router::<openapi::ApiDoc>(api::routes(state), api::public_routes(state))
        .await
}
