//! Application state management

use axum_helpers::ApiKeyAuth;
use domain_products::{InMemoryProductRepository, ProductService};
use std::sync::Arc;

use crate::config::Config;

pub type Products = ProductService<InMemoryProductRepository>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub products: Arc<Products>,
    pub auth: ApiKeyAuth,
}

impl AppState {
    /// State backed by a freshly seeded store
    pub fn new(config: Config) -> Self {
        Self::with_repository(config, InMemoryProductRepository::seeded())
    }

    pub fn with_repository(config: Config, repository: InMemoryProductRepository) -> Self {
        let auth = ApiKeyAuth::new(&config.api_key);
        Self {
            config,
            products: Arc::new(ProductService::new(repository)),
            auth,
        }
    }
}
