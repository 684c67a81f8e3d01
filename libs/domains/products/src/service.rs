//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CategoryStats, ListQuery, Product, ProductPage, ProductPayload};
use crate::query::{category_stats, list_page};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service layer validates input, runs the listing pipeline and
/// orchestrates repository operations.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Search, filter and page the product list
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ListQuery) -> ProductResult<ProductPage> {
        let products = self.repository.list().await?;
        Ok(list_page(products, &query))
    }

    /// Count products per category over the whole store
    #[instrument(skip(self))]
    pub async fn product_stats(&self) -> ProductResult<CategoryStats> {
        let products = self.repository.list().await?;
        Ok(category_stats(&products))
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Create a new product with a fresh id
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: ProductPayload) -> ProductResult<Product> {
        input.validate().map_err(|_| ProductError::InvalidData)?;

        self.repository.insert(Product::new(input)).await
    }

    /// Replace every field of an existing product
    ///
    /// Input is validated before the id is looked up.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: ProductPayload) -> ProductResult<Product> {
        input.validate().map_err(|_| ProductError::InvalidData)?;

        self.repository
            .replace(id, input)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        if !self.repository.remove(id).await? {
            return Err(ProductError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Number of stored products
    pub async fn product_count(&self) -> ProductResult<usize> {
        self.repository.count().await
    }
}
