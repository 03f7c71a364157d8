//! Aggregates module
pub mod product;
pub mod dashboard;

pub use product::{PriceTag, Product, ProductStatus};
pub use dashboard::{Dashboard, DashboardSnapshot, ProductDetail};
