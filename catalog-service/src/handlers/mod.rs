//! HTTP handlers for catalog-service.

pub mod diagnostics;
pub mod health;
pub mod products;
pub mod root;

pub use diagnostics::diagnostics;
pub use health::{health_check, readiness_check};
pub use products::{get_product, list_products};
pub use root::{hello, root};
