use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use service_core::error::AppError;

use crate::models::Product;
use crate::startup::AppState;

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    /// Free-text search over title, category and brand.
    pub q: Option<String>,
}

#[tracing::instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListProductsQuery>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.catalog.list_products(params.q.as_deref()).await?;
    tracing::info!(count = products.len(), "Listed products");
    Ok(Json(products))
}

#[tracing::instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = state.catalog.get_product(&product_id).await?;
    Ok(Json(product))
}
