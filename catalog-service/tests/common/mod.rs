//! Test helpers for catalog-service integration tests.

#![allow(dead_code)]

use catalog_service::config::{CatalogConfig, MongoConfig};
use catalog_service::services::{CatalogStore, InMemoryStore, MongoDb};
use catalog_service::startup::Application;
use mongodb::bson::Document;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Option<Arc<dyn CatalogStore>>,
}

fn test_config(mongodb: Option<MongoConfig>) -> CatalogConfig {
    CatalogConfig {
        common: CoreConfig {
            port: 0,
            ..CoreConfig::default()
        },
        mongodb,
    }
}

impl TestApp {
    /// Spawn over an empty in-memory store; the seed step fills it.
    pub async fn spawn() -> Self {
        Self::spawn_with_store(Some(Arc::new(InMemoryStore::new("catalog_test")))).await
    }

    /// Spawn over an in-memory store preloaded with `records`, so seeding is
    /// skipped.
    pub async fn spawn_with_records(records: Vec<Document>) -> Self {
        Self::spawn_with_store(Some(Arc::new(InMemoryStore::with_records(
            "catalog_test",
            records,
        ))))
        .await
    }

    /// Spawn with no store configured.
    pub async fn spawn_without_store() -> Self {
        Self::spawn_with_store(None).await
    }

    /// Spawn against a real MongoDB (`TEST_MONGODB_URI`) with a fresh
    /// database.
    pub async fn spawn_with_mongodb() -> Self {
        let mongo = MongoConfig {
            uri: std::env::var("TEST_MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: format!("catalog_test_{}", uuid::Uuid::new_v4().simple()),
        };
        let db = MongoDb::connect(&mongo.uri, &mongo.database)
            .await
            .expect("Failed to create MongoDB client");
        let store: Arc<dyn CatalogStore> = Arc::new(db);

        let app = Application::build_with_store(test_config(Some(mongo)), Some(store.clone()))
            .await
            .expect("Failed to build test application");
        Self::start(app, Some(store)).await
    }

    pub async fn spawn_with_store(store: Option<Arc<dyn CatalogStore>>) -> Self {
        let app = Application::build_with_store(test_config(None), store.clone())
            .await
            .expect("Failed to build test application");
        Self::start(app, store).await
    }

    async fn start(app: Application, store: Option<Arc<dyn CatalogStore>>) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        }

        TestApp {
            address,
            port,
            store,
        }
    }

    pub fn client(&self) -> reqwest::Client {
        reqwest::Client::new()
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client()
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
