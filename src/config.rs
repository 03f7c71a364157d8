//! Dashboard configuration from the environment.

use std::path::PathBuf;
use crate::domain::value_objects::PriceRange;
use crate::query::DEFAULT_PAGE_SIZE;
use crate::{CatalogError, Result};

const DEFAULT_PRICE_MAX: u32 = 5000;

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    pub page_size: usize,
    /// Upper end of the price slider; the lower end is always 0.
    pub price_max: u32,
    pub currency: String,
    /// JSON catalog to load instead of the built-in one.
    pub data_path: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { page_size: DEFAULT_PAGE_SIZE, price_max: DEFAULT_PRICE_MAX, currency: "USD".to_string(), data_path: None }
    }
}

impl DashboardConfig {
    /// Reads `CATALOG_PAGE_SIZE`, `CATALOG_PRICE_MAX`, `CATALOG_CURRENCY` and `CATALOG_DATA`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let page_size = match lookup("CATALOG_PAGE_SIZE") {
            Some(raw) => parse_positive("CATALOG_PAGE_SIZE", &raw)?,
            None => defaults.page_size,
        };
        let price_max = match lookup("CATALOG_PRICE_MAX") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| CatalogError::Config(format!("CATALOG_PRICE_MAX={}: {}", raw, e)))?,
            None => defaults.price_max,
        };
        let currency = lookup("CATALOG_CURRENCY")
            .map(|c| c.trim().to_uppercase())
            .filter(|c| !c.is_empty())
            .unwrap_or(defaults.currency);
        let data_path = lookup("CATALOG_DATA").filter(|p| !p.trim().is_empty()).map(PathBuf::from);
        Ok(Self { page_size, price_max, currency, data_path })
    }

    pub fn price_bounds(&self) -> PriceRange { PriceRange::zero_to(self.price_max) }
}

fn parse_positive(key: &str, raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(CatalogError::Config(format!("{} must be positive", key))),
        Ok(n) => Ok(n),
        Err(e) => Err(CatalogError::Config(format!("{}={}: {}", key, raw, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = DashboardConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, DashboardConfig::default());
        assert_eq!(cfg.page_size, 8);
        assert_eq!(cfg.price_bounds(), PriceRange::zero_to(5000));
    }

    #[test]
    fn test_overrides() {
        let cfg = DashboardConfig::from_lookup(lookup(&[
            ("CATALOG_PAGE_SIZE", "4"),
            ("CATALOG_PRICE_MAX", "10000"),
            ("CATALOG_CURRENCY", "ngn"),
            ("CATALOG_DATA", "catalog.json"),
        ])).unwrap();
        assert_eq!(cfg.page_size, 4);
        assert_eq!(cfg.price_max, 10000);
        assert_eq!(cfg.currency, "NGN");
        assert_eq!(cfg.data_path, Some(PathBuf::from("catalog.json")));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(DashboardConfig::from_lookup(lookup(&[("CATALOG_PAGE_SIZE", "0")])), Err(CatalogError::Config(_))));
        assert!(matches!(DashboardConfig::from_lookup(lookup(&[("CATALOG_PAGE_SIZE", "ten")])), Err(CatalogError::Config(_))));
        assert!(matches!(DashboardConfig::from_lookup(lookup(&[("CATALOG_PRICE_MAX", "-5")])), Err(CatalogError::Config(_))));
    }
}
