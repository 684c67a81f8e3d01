use axum_helpers::ValidatedPayload;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Message reported for any rejected product body
pub const INVALID_PRODUCT_MESSAGE: &str = "Invalid product data: check field types and values";

/// Product entity held by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned on creation
    pub id: String,
    pub name: String,
    pub description: String,
    /// Strictly positive
    pub price: f64,
    /// Free-form category, matched case-insensitively when filtering
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    /// Builds a new product with a fresh UUID v4 identifier.
    pub fn new(input: ProductPayload) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), input)
    }

    pub fn with_id(id: impl Into<String>, input: ProductPayload) -> Self {
        Self {
            id: id.into(),
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock,
        }
    }

    /// Overwrites every field except `id`.
    pub fn apply(&mut self, input: ProductPayload) {
        self.name = input.name;
        self.description = input.description;
        self.price = input.price;
        self.category = input.category;
        self.in_stock = input.in_stock;
    }
}

/// Body of create and full-update requests.
///
/// All fields are required; `inStock: false` is accepted. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    #[validate(length(min = 1))]
    pub category: String,
    pub in_stock: bool,
}

impl ValidatedPayload for ProductPayload {
    const INVALID_MESSAGE: &'static str = INVALID_PRODUCT_MESSAGE;
}

/// Query parameters for listing products.
///
/// `page` and `limit` stay raw so that garbage input falls back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-insensitive substring of the product name
    pub search: Option<String>,
    /// Case-insensitive exact category
    pub category: Option<String>,
    /// 1-based page number (default 1)
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
    /// Page size (default 10)
    #[param(value_type = Option<i64>)]
    pub limit: Option<String>,
}

/// One page of a filtered product listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPage {
    /// Number of products matching the filters, before paging
    pub total: usize,
    pub page: i64,
    pub limit: i64,
    pub products: Vec<Product>,
}

/// Product count per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryStats {
    pub stats: BTreeMap<String, usize>,
}

/// Fixture records loaded into a fresh store.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Laptop".to_string(),
            description: "High-performance laptop with 16GB RAM".to_string(),
            price: 1200.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "2".to_string(),
            name: "Smartphone".to_string(),
            description: "Latest model with 128GB storage".to_string(),
            price: 800.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "3".to_string(),
            name: "Coffee Maker".to_string(),
            description: "Programmable coffee maker with timer".to_string(),
            price: 50.0,
            category: "kitchen".to_string(),
            in_stock: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> ProductPayload {
        ProductPayload {
            name: "Kettle".to_string(),
            description: "Electric kettle".to_string(),
            price: 35.5,
            category: "kitchen".to_string(),
            in_stock: false,
        }
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product::with_id("42", payload());
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["inStock"], json!(false));
        assert!(value.get("in_stock").is_none());
        assert_eq!(value["id"], json!("42"));
    }

    #[test]
    fn test_new_assigns_distinct_ids() {
        let a = Product::new(payload());
        let b = Product::new(payload());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut product = Product::with_id("7", payload());
        let mut update = payload();
        update.name = "Teapot".to_string();
        update.in_stock = true;

        product.apply(update);
        assert_eq!(product.id, "7");
        assert_eq!(product.name, "Teapot");
        assert!(product.in_stock);
    }

    #[test]
    fn test_payload_rules() {
        assert!(payload().validate().is_ok());

        let mut zero_price = payload();
        zero_price.price = 0.0;
        assert!(zero_price.validate().is_err());

        let mut negative_price = payload();
        negative_price.price = -5.0;
        assert!(negative_price.validate().is_err());

        let mut blank_name = payload();
        blank_name.name = String::new();
        assert!(blank_name.validate().is_err());

        let mut blank_category = payload();
        blank_category.category = String::new();
        assert!(blank_category.validate().is_err());
    }

    #[test]
    fn test_payload_requires_in_stock() {
        let missing = json!({
            "name": "Kettle",
            "description": "Electric kettle",
            "price": 10,
            "category": "kitchen"
        });
        assert!(serde_json::from_value::<ProductPayload>(missing).is_err());
    }

    #[test]
    fn test_payload_rejects_string_price() {
        let body = json!({
            "name": "Kettle",
            "description": "Electric kettle",
            "price": "10",
            "category": "kitchen",
            "inStock": true
        });
        assert!(serde_json::from_value::<ProductPayload>(body).is_err());
    }

    #[test]
    fn test_payload_ignores_unknown_fields() {
        let body = json!({
            "id": "ignored",
            "name": "Kettle",
            "description": "Electric kettle",
            "price": 10,
            "category": "kitchen",
            "inStock": true,
            "color": "red"
        });
        let parsed: ProductPayload = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.price, 10.0);
    }

    #[test]
    fn test_seed_products() {
        let seeds = seed_products();
        let ids: Vec<_> = seeds.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert!(seeds.iter().all(|p| p.price > 0.0));
    }
}
