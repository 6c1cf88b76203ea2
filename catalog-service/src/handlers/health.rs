use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::startup::AppState;

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "catalog-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// 200 only when a store is configured and answers a ping.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let Some(store) = state.catalog.store() else {
        return StatusCode::SERVICE_UNAVAILABLE;
    };
    match store.health_check().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
