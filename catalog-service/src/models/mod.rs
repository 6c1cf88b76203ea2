pub mod product;

pub use product::{NormalizeError, Product, DEFAULT_CATEGORY};
