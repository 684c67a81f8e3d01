use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{Product, ProductPayload, seed_products};

/// Repository trait for Product storage
///
/// Every call is atomic with respect to every other call on the same store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Snapshot of all products in insertion order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Append a product
    async fn insert(&self, product: Product) -> ProductResult<Product>;

    /// Overwrite every field but the id; `None` when the id is unknown
    async fn replace(&self, id: &str, input: ProductPayload) -> ProductResult<Option<Product>>;

    /// Delete a product by ID, returning whether it existed
    async fn remove(&self, id: &str) -> ProductResult<bool>;

    /// Number of stored products
    async fn count(&self) -> ProductResult<usize>;
}

/// In-memory implementation guarded by a single lock.
///
/// Lookups are linear scans; the list keeps insertion order.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the fixture products
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.clone())
    }

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        products.push(product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn replace(&self, id: &str, input: ProductPayload) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        product.apply(input);

        tracing::info!(product_id = %id, "Updated product");
        Ok(Some(product.clone()))
    }

    async fn remove(&self, id: &str) -> ProductResult<bool> {
        let mut products = self.products.write().await;
        let Some(index) = products.iter().position(|p| p.id == id) else {
            return Ok(false);
        };

        products.remove(index);

        tracing::info!(product_id = %id, "Deleted product");
        Ok(true)
    }

    async fn count(&self) -> ProductResult<usize> {
        Ok(self.products.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str) -> ProductPayload {
        ProductPayload {
            name: name.to_string(),
            description: "A thing".to_string(),
            price: 9.99,
            category: "misc".to_string(),
            in_stock: true,
        }
    }

    #[tokio::test]
    async fn test_seeded_store() {
        let repo = InMemoryProductRepository::seeded();
        assert_eq!(repo.count().await.unwrap(), 3);

        let laptop = repo.get_by_id("1").await.unwrap().unwrap();
        assert_eq!(laptop.name, "Laptop");
        assert!(repo.get_by_id("4").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_appends_in_order() {
        let repo = InMemoryProductRepository::seeded();
        let product = repo.insert(Product::new(payload("Lamp"))).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all.last().unwrap().id, product.id);
    }

    #[tokio::test]
    async fn test_list_is_a_snapshot() {
        let repo = InMemoryProductRepository::seeded();
        let mut snapshot = repo.list().await.unwrap();
        snapshot.clear();

        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_replace_keeps_id_and_position() {
        let repo = InMemoryProductRepository::seeded();
        let updated = repo.replace("2", payload("Phone")).await.unwrap().unwrap();
        assert_eq!(updated.id, "2");
        assert_eq!(updated.name, "Phone");

        let all = repo.list().await.unwrap();
        assert_eq!(all[1], updated);
    }

    #[tokio::test]
    async fn test_replace_unknown_id() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.replace("1", payload("x")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove() {
        let repo = InMemoryProductRepository::seeded();
        assert!(repo.remove("1").await.unwrap());
        assert!(!repo.remove("1").await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryProductRepository::new();
        let other = repo.clone();
        other.insert(Product::new(payload("Shared"))).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
