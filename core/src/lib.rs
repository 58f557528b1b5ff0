#![deny(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

pub mod catalog;
pub mod cursor;
pub mod models;
pub mod query;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError};
pub use models::{Availability, FilterRequest, PageResult, Product, SortBy, DEFAULT_PAGE_SIZE};
pub use query::query_products;
