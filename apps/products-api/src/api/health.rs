//! Readiness endpoint

use axum::{extract::State, routing::get, Json, Router};
use axum_helpers::AppError;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadyResponse {
    pub status: String,
    /// Products currently in the store
    pub products: usize,
}

async fn ready(State(state): State<AppState>) -> Result<Json<ReadyResponse>, AppError> {
    let products = state.products.product_count().await?;

    Ok(Json(ReadyResponse {
        status: "ready".to_string(),
        products,
    }))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
}
