//! Product endpoints
//!
//! Creation answers 200 with the stored row, not 201.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{NewProduct, Product};

/// GET /products - every product, unordered
async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.store.list().await?;
    tracing::debug!(count = products.len(), "listed products");
    Ok(Json(products))
}

/// POST /products - create a product
async fn create_product(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<NewProduct>,
) -> Result<Json<Product>, ApiError> {
    let product = state.store.create(req).await?;
    tracing::info!(id = product.id, name = %product.name, "product created");
    Ok(Json(product))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/products", get(list_products).post(create_product))
}
