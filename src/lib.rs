//! OpenSASE Catalog Dashboard
//!
//! In-memory product catalog view: search, filter, sort and paginate a
//! session-immutable list of products.
//!
//! ## Features
//! - Free-text search over name and id
//! - Status, category, brand and price-range filters
//! - Stable multi-field sorting
//! - Pagination with page windows
//! - Row selection for bulk actions
//! - Summary statistics and facets

pub mod catalog;
pub mod config;
pub mod domain;
pub mod intent;
pub mod query;
pub mod stats;

use thiserror::Error;

pub use catalog::{JsonCatalog, RecordProvider, RecordStore, SeedCatalog};
pub use config::DashboardConfig;
pub use domain::aggregates::{Dashboard, DashboardSnapshot, Product, ProductStatus};
pub use domain::value_objects::{Discount, Money, PriceRange, PriceRangeError};
pub use intent::Intent;
pub use query::{apply, FilterState, PageRequest, QueryResult, SortDirection, SortField, SortState, StatusFilter};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid price range: {0}")]
    InvalidRange(#[from] PriceRangeError),

    #[error("Page size must be positive")]
    InvalidPageSize,

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Duplicate product id: {0}")]
    DuplicateId(String),

    #[error("Invalid product record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
