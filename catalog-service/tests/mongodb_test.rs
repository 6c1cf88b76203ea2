//! Tests against a live MongoDB. Run with `TEST_MONGODB_URI` set and
//! `--ignored`.

mod common;

use common::TestApp;

#[tokio::test]
#[ignore] // Requires MongoDB
async fn seeds_and_searches_against_mongodb() {
    let app = TestApp::spawn_with_mongodb().await;

    let products: Vec<serde_json::Value> = app
        .get("/api/products")
        .await
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(products.len(), 8);
    assert_eq!(products[0]["title"], "Backpack");

    let electronics: Vec<serde_json::Value> = app
        .get("/api/products?q=ELECTRO")
        .await
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(electronics.len(), 2);
}

#[tokio::test]
#[ignore] // Requires MongoDB
async fn reseeding_is_a_noop_against_mongodb() {
    let app = TestApp::spawn_with_mongodb().await;
    let store = app.store.clone().expect("store configured");

    let outcome = catalog_service::services::seed_products_if_needed(Some(store.as_ref())).await;
    assert_eq!(
        outcome,
        catalog_service::services::SeedOutcome::AlreadyPopulated(8)
    );
}
