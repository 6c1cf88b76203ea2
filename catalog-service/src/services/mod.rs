pub mod catalog;
pub mod database;
pub mod diagnostics;
pub mod fixtures;
pub mod memory;
pub mod query;
pub mod seed;
pub mod store;

pub use catalog::CatalogService;
pub use database::MongoDb;
pub use diagnostics::{diagnose, DiagnosticsReport, EnvPresence};
pub use memory::InMemoryStore;
pub use query::ProductFilter;
pub use seed::{seed_products_if_needed, SeedOutcome};
pub use store::CatalogStore;
