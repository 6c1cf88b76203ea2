mod common;

use catalog_service::services::InMemoryStore;
use common::TestApp;
use std::sync::Arc;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn_without_store().await;

    let response = app.get("/health").await;
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "catalog-service");
}

#[tokio::test]
async fn readiness_check_with_store() {
    let app = TestApp::spawn().await;
    assert_eq!(app.get("/ready").await.status(), 200);
}

#[tokio::test]
async fn readiness_check_without_store() {
    let app = TestApp::spawn_without_store().await;
    assert_eq!(app.get("/ready").await.status(), 503);
}

#[tokio::test]
async fn readiness_check_with_failing_store() {
    let store = Arc::new(InMemoryStore::unavailable("catalog_test", "connection refused"));
    let app = TestApp::spawn_with_store(Some(store)).await;
    assert_eq!(app.get("/ready").await.status(), 503);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .get(format!("{}/api/hello", app.address))
        .header("x-request-id", "req-123")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.headers()["x-request-id"], "req-123");

    let generated = app.get("/api/hello").await;
    assert!(generated.headers().contains_key("x-request-id"));
}
