//! Record store and its providers.

mod seed;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use crate::domain::aggregates::Product;
use crate::{CatalogError, Result};

/// Source of catalog records, read once per session.
pub trait RecordProvider {
    fn all_records(&self) -> Result<Vec<Product>>;
}

/// The eight-product catalog bundled with the dashboard.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeedCatalog;

impl SeedCatalog {
    pub fn records() -> Vec<Product> { seed::products() }
}

impl RecordProvider for SeedCatalog {
    fn all_records(&self) -> Result<Vec<Product>> { Ok(seed::products()) }
}

/// Reads a JSON array of products from disk.
#[derive(Clone, Debug)]
pub struct JsonCatalog { path: PathBuf }

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
    pub fn path(&self) -> &Path { &self.path }

    pub fn parse(json: &str) -> Result<Vec<Product>> {
        let records: Vec<Product> = serde_json::from_str(json)?;
        records.iter().try_for_each(Product::check)?;
        Ok(records)
    }
}

impl RecordProvider for JsonCatalog {
    fn all_records(&self) -> Result<Vec<Product>> {
        let raw = std::fs::read_to_string(&self.path)?;
        Self::parse(&raw)
    }
}

/// Ordered, session-immutable product list with unique ids.
#[derive(Clone, Debug, Default)]
pub struct RecordStore { records: Vec<Product> }

impl RecordStore {
    /// Validates every record and rejects repeated ids.
    pub fn new(records: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            record.check()?;
            if !seen.insert(record.id()) { return Err(CatalogError::DuplicateId(record.id().to_string())); }
        }
        Ok(Self { records })
    }

    pub fn load(provider: &dyn RecordProvider) -> Result<Self> {
        let store = Self::new(provider.all_records()?)?;
        tracing::info!(records = store.len(), "record store loaded");
        Ok(store)
    }

    pub fn records(&self) -> &[Product] { &self.records }
    pub fn get(&self, id: &str) -> Option<&Product> { self.records.iter().find(|p| p.id() == id) }
    pub fn contains(&self, id: &str) -> bool { self.get(id).is_some() }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}
