//! Handler tests for Products domain
//!
//! These tests drive the domain router directly, without the API key layer
//! or the rest of the application stack:
//! - Request deserialization and validation
//! - Response serialization
//! - HTTP status codes
//! - Error responses

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use axum_helpers::ErrorResponse;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn setup() -> (Router, Arc<ProductService<InMemoryProductRepository>>) {
    let service = Arc::new(ProductService::new(InMemoryProductRepository::seeded()));
    (handlers::router(service.clone()), service)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn valid_body() -> Value {
    json!({
        "name": "Blender",
        "description": "Countertop blender",
        "price": 99.5,
        "category": "Kitchen",
        "inStock": false
    })
}

#[tokio::test]
async fn test_list_returns_seeded_products() {
    let (app, _) = setup();

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page: ProductPage = json_body(response.into_body()).await;
    assert_eq!(page.total, 3);
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 10);
    assert_eq!(page.products.len(), 3);
}

#[tokio::test]
async fn test_list_body_shape() {
    let (app, _) = setup();

    let response = app.oneshot(get("/?limit=1")).await.unwrap();
    let body: Value = json_body(response.into_body()).await;

    assert_eq!(body["total"], json!(3));
    assert_eq!(body["limit"], json!(1));
    assert_eq!(body["products"][0]["id"], json!("1"));
    assert_eq!(body["products"][0]["inStock"], json!(true));
}

#[tokio::test]
async fn test_list_filters_and_pages() {
    let (app, _) = setup();

    let response = app
        .clone()
        .oneshot(get("/?category=ELECTRONICS&page=2&limit=1"))
        .await
        .unwrap();
    let page: ProductPage = json_body(response.into_body()).await;
    assert_eq!(page.total, 2);
    assert_eq!(page.products.len(), 1);
    assert_eq!(page.products[0].id, "2");

    let response = app.oneshot(get("/?search=lap&page=5&limit=1")).await.unwrap();
    let page: ProductPage = json_body(response.into_body()).await;
    assert_eq!(page.total, 1);
    assert!(page.products.is_empty());
}

#[tokio::test]
async fn test_list_ignores_garbage_paging() {
    let (app, _) = setup();

    let response = app.oneshot(get("/?page=abc&limit=-")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page: ProductPage = json_body(response.into_body()).await;
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 10);
}

#[tokio::test]
async fn test_stats_is_not_an_id_lookup() {
    let (app, _) = setup();

    let response = app.oneshot(get("/stats")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "stats": { "electronics": 2, "kitchen": 1 } }));
}

#[tokio::test]
async fn test_get_product_by_id() {
    let (app, _) = setup();

    let response = app.oneshot(get("/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.name, "Coffee Maker");
    assert!(!product.in_stock);
}

#[tokio::test]
async fn test_get_unknown_product_returns_404() {
    let (app, _) = setup();

    let response = app.oneshot(get("/does-not-exist")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "NotFoundError");
    assert_eq!(error.message, "Product not found");
}

#[tokio::test]
async fn test_create_product_handler_returns_201() {
    let (app, service) = setup();

    let response = app
        .clone()
        .oneshot(with_json("POST", "/", valid_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: Product = json_body(response.into_body()).await;
    assert_eq!(created.name, "Blender");
    assert!(!created.in_stock);
    assert!(!["1", "2", "3"].contains(&created.id.as_str()));
    assert_eq!(service.product_count().await.unwrap(), 4);

    let response = app.oneshot(get(&format!("/{}", created.id))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_product_handler_validates_input() {
    let invalid_bodies = [
        json!({ "name": "X", "description": "Y", "price": -5, "category": "c", "inStock": true }),
        json!({ "name": "X", "description": "Y", "price": 0, "category": "c", "inStock": true }),
        json!({ "name": "X", "description": "Y", "price": 5, "category": "c" }),
        json!({ "name": "", "description": "Y", "price": 5, "category": "c", "inStock": true }),
        json!({ "name": "X", "description": "Y", "price": "5", "category": "c", "inStock": true }),
        json!({ "name": "X", "description": "Y", "price": 5, "category": "c", "inStock": "yes" }),
        json!([1, 2, 3]),
    ];

    for body in invalid_bodies {
        let (app, service) = setup();
        let response = app.oneshot(with_json("POST", "/", body.clone())).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");

        let error: ErrorResponse = json_body(response.into_body()).await;
        assert_eq!(error.error, "ValidationError");
        assert_eq!(error.message, INVALID_PRODUCT_MESSAGE);
        assert_eq!(service.product_count().await.unwrap(), 3);
    }
}

#[tokio::test]
async fn test_create_product_rejects_malformed_json() {
    let (app, service) = setup();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(service.product_count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_update_product_keeps_id() {
    let (app, _) = setup();

    let response = app
        .clone()
        .oneshot(with_json("PUT", "/1", valid_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated.id, "1");
    assert_eq!(updated.name, "Blender");

    let response = app.oneshot(get("/1")).await.unwrap();
    let fetched: Product = json_body(response.into_body()).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_unknown_product_returns_404() {
    let (app, _) = setup();

    let response = app
        .oneshot(with_json("PUT", "/missing", valid_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_validates_before_existence() {
    let (app, _) = setup();

    let response = app
        .oneshot(with_json("PUT", "/missing", json!({ "name": "only a name" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_product_then_404() {
    let (app, _) = setup();

    let delete = || {
        Request::builder()
            .method("DELETE")
            .uri("/1")
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let response = app.clone().oneshot(get("/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    for _ in 0..2 {
        let response = app.clone().oneshot(delete()).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
