use crate::services::query::ProductFilter;
use crate::services::store::CatalogStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::FindOptions,
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

pub const PRODUCT_COLLECTION: &str = "product";

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    /// Parses the URI and builds a client. The driver connects lazily, so an
    /// unreachable server surfaces on the first operation, not here.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    pub fn products(&self) -> Collection<Document> {
        self.db.collection(PRODUCT_COLLECTION)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl CatalogStore for MongoDb {
    async fn find_products(&self, filter: &ProductFilter) -> Result<Vec<Document>, AppError> {
        let find_options = FindOptions::builder().sort(doc! { "title": 1 }).build();

        let cursor = self
            .products()
            .find(filter.to_document(), find_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query products: {}", e);
                AppError::from(e)
            })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect products: {}", e);
            AppError::from(e)
        })
    }

    async fn find_product(&self, id: &ObjectId) -> Result<Option<Document>, AppError> {
        self.products()
            .find_one(doc! { "_id": *id }, None)
            .await
            .map_err(|e| {
                tracing::error!(product_id = %id, "Failed to find product: {}", e);
                AppError::from(e)
            })
    }

    async fn count_products(&self) -> Result<u64, AppError> {
        self.products()
            .count_documents(doc! {}, None)
            .await
            .map_err(AppError::from)
    }

    async fn insert_products(&self, records: Vec<Document>) -> Result<(), AppError> {
        if records.is_empty() {
            return Ok(());
        }
        self.products()
            .insert_many(records, None)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.db
            .list_collection_names(None)
            .await
            .map_err(AppError::from)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    fn database_name(&self) -> &str {
        self.db.name()
    }
}
