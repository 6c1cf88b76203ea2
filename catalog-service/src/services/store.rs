//! Store abstraction the catalog reads from.
//!
//! Handlers never touch the driver directly; they go through a
//! `CatalogStore` so the service can run against MongoDB or in memory.

use crate::services::query::ProductFilter;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use service_core::error::AppError;

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Returns every record matching `filter`, ordered by `title` ascending.
    /// Records with equal titles keep their natural store order.
    async fn find_products(&self, filter: &ProductFilter) -> Result<Vec<Document>, AppError>;

    async fn find_product(&self, id: &ObjectId) -> Result<Option<Document>, AppError>;

    async fn count_products(&self) -> Result<u64, AppError>;

    async fn insert_products(&self, records: Vec<Document>) -> Result<(), AppError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;

    fn database_name(&self) -> &str;
}
