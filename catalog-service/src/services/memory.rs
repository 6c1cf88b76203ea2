//! In-memory store for tests and local runs without MongoDB.

use crate::services::query::ProductFilter;
use crate::services::store::CatalogStore;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use service_core::error::AppError;
use std::sync::Mutex;

use super::database::PRODUCT_COLLECTION;

pub struct InMemoryStore {
    name: String,
    records: Mutex<Vec<Document>>,
    failure: Option<String>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new("catalog")
    }
}

impl InMemoryStore {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            records: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// Store preloaded with `records`. Records without `_id` get a fresh one.
    pub fn with_records(name: &str, records: Vec<Document>) -> Self {
        let store = Self::new(name);
        if let Ok(mut guard) = store.records.lock() {
            guard.extend(records.into_iter().map(with_object_id));
        }
        store
    }

    /// Store whose every operation fails with `message`.
    pub fn unavailable(name: &str, message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new(name)
        }
    }

    fn check_available(&self) -> Result<(), AppError> {
        match &self.failure {
            Some(message) => Err(AppError::DatabaseError(anyhow::anyhow!(message.clone()))),
            None => Ok(()),
        }
    }

    fn records(&self) -> Result<std::sync::MutexGuard<'_, Vec<Document>>, AppError> {
        self.records
            .lock()
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("In-memory store poisoned: {}", e)))
    }
}

fn with_object_id(mut record: Document) -> Document {
    if !record.contains_key("_id") {
        record.insert("_id", ObjectId::new());
    }
    record
}

fn title_of(record: &Document) -> &str {
    record.get_str("title").unwrap_or_default()
}

#[async_trait]
impl CatalogStore for InMemoryStore {
    async fn find_products(&self, filter: &ProductFilter) -> Result<Vec<Document>, AppError> {
        self.check_available()?;
        let mut matching: Vec<Document> = self
            .records()?
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        // Stable sort keeps insertion order for equal titles.
        matching.sort_by(|a, b| title_of(a).cmp(title_of(b)));
        Ok(matching)
    }

    async fn find_product(&self, id: &ObjectId) -> Result<Option<Document>, AppError> {
        self.check_available()?;
        let target = Bson::ObjectId(*id);
        Ok(self
            .records()?
            .iter()
            .find(|record| record.get("_id") == Some(&target))
            .cloned())
    }

    async fn count_products(&self) -> Result<u64, AppError> {
        self.check_available()?;
        Ok(self.records()?.len() as u64)
    }

    async fn insert_products(&self, records: Vec<Document>) -> Result<(), AppError> {
        self.check_available()?;
        self.records()?
            .extend(records.into_iter().map(with_object_id));
        Ok(())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.check_available()?;
        if self.records()?.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(vec![PRODUCT_COLLECTION.to_string()])
        }
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.check_available()
    }

    fn database_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn test_find_products_sorts_by_title() {
        let store = InMemoryStore::with_records(
            "test",
            vec![
                doc! { "title": "Water Bottle" },
                doc! { "title": "Backpack" },
                doc! { "title": "Desk Lamp" },
            ],
        );

        let records = store
            .find_products(&ProductFilter::default())
            .await
            .unwrap();
        let titles: Vec<&str> = records.iter().map(title_of).collect();
        assert_eq!(titles, vec!["Backpack", "Desk Lamp", "Water Bottle"]);
    }

    #[tokio::test]
    async fn test_equal_titles_keep_insertion_order() {
        let store = InMemoryStore::with_records(
            "test",
            vec![
                doc! { "title": "Mug", "brand": "First" },
                doc! { "title": "Anvil" },
                doc! { "title": "Mug", "brand": "Second" },
            ],
        );

        let records = store
            .find_products(&ProductFilter::default())
            .await
            .unwrap();
        assert_eq!(records[1].get_str("brand").unwrap(), "First");
        assert_eq!(records[2].get_str("brand").unwrap(), "Second");
    }

    #[tokio::test]
    async fn test_insert_assigns_ids() {
        let store = InMemoryStore::default();
        store
            .insert_products(vec![doc! { "title": "Lamp" }])
            .await
            .unwrap();

        let records = store
            .find_products(&ProductFilter::default())
            .await
            .unwrap();
        let id = records[0].get_object_id("_id").unwrap();
        let found = store.find_product(&id).await.unwrap();
        assert!(found.is_some());
        assert_eq!(store.count_products().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_every_operation() {
        let store = InMemoryStore::unavailable("test", "connection refused");
        assert!(store.count_products().await.is_err());
        assert!(store.health_check().await.is_err());
        assert!(store.list_collection_names().await.is_err());
        assert!(store
            .find_products(&ProductFilter::default())
            .await
            .is_err());
    }
}
