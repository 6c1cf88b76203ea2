use crate::models::Product;
use crate::services::query::ProductFilter;
use crate::services::store::CatalogStore;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use std::sync::Arc;

pub const STORE_NOT_CONFIGURED: &str = "Database not configured";

/// Read-only catalog queries over an optional store.
#[derive(Clone)]
pub struct CatalogService {
    store: Option<Arc<dyn CatalogStore>>,
}

impl CatalogService {
    pub fn new(store: Option<Arc<dyn CatalogStore>>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> Option<&Arc<dyn CatalogStore>> {
        self.store.as_ref()
    }

    fn require_store(&self) -> Result<&Arc<dyn CatalogStore>, AppError> {
        self.store
            .as_ref()
            .ok_or_else(|| AppError::ServiceUnavailable(STORE_NOT_CONFIGURED.to_string()))
    }

    /// Lists products matching `term`, ordered by title.
    pub async fn list_products(&self, term: Option<&str>) -> Result<Vec<Product>, AppError> {
        let store = self.require_store()?;
        let filter = ProductFilter::from_term(term);

        let records = store.find_products(&filter).await?;
        tracing::debug!(
            term = ?filter.term(),
            count = records.len(),
            "Fetched product records"
        );

        records
            .iter()
            .map(|record| Product::from_document(record).map_err(AppError::from))
            .collect()
    }

    /// Fetches a single product. `product_id` must be a 24-character hex
    /// ObjectId; it is validated before the store is queried.
    pub async fn get_product(&self, product_id: &str) -> Result<Product, AppError> {
        let store = self.require_store()?;

        let oid = ObjectId::parse_str(product_id)
            .map_err(|_| AppError::BadRequest(anyhow::anyhow!("Invalid product id")))?;

        let record = store
            .find_product(&oid)
            .await?
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Product not found")))?;

        Ok(Product::from_document(&record)?)
    }
}
