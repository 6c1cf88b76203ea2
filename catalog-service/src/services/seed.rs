//! Startup seeding of an empty catalog.
//!
//! Two processes starting against the same empty store can both observe a
//! zero count and insert the fixtures twice. Nothing here guards against it.

use crate::services::fixtures::sample_products;
use crate::services::store::CatalogStore;
use service_core::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// No store configured; nothing to do.
    NotConfigured,
    /// The store already held this many records.
    AlreadyPopulated(u64),
    /// This many fixture records were inserted.
    Seeded(usize),
    /// Counting or inserting failed. The error has been logged.
    Failed,
}

/// Seeds the catalog if it is empty. Never fails: errors are logged and
/// reported as [`SeedOutcome::Failed`].
pub async fn seed_products_if_needed(store: Option<&dyn CatalogStore>) -> SeedOutcome {
    let Some(store) = store else {
        tracing::info!("Catalog store not configured, skipping seed");
        return SeedOutcome::NotConfigured;
    };

    match try_seed(store).await {
        Ok(outcome) => {
            tracing::info!(outcome = ?outcome, "Catalog seed step finished");
            outcome
        }
        Err(e) => {
            tracing::warn!("Catalog seed failed, continuing without sample data: {}", e);
            SeedOutcome::Failed
        }
    }
}

async fn try_seed(store: &dyn CatalogStore) -> Result<SeedOutcome, AppError> {
    let count = store.count_products().await?;
    if count > 0 {
        return Ok(SeedOutcome::AlreadyPopulated(count));
    }

    let records = sample_products();
    let inserted = records.len();
    store.insert_products(records).await?;
    Ok(SeedOutcome::Seeded(inserted))
}
