//! Summary statistics and filter facets.

use serde::Serialize;
use crate::domain::aggregates::{Product, ProductStatus};
use crate::domain::value_objects::Money;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CatalogStats {
    pub products: usize,
    pub total_stock: u64,
    pub active: usize,
    pub on_hold: usize,
    pub out_of_stock: usize,
    pub discounted: usize,
    /// Σ price × stock at list price.
    pub inventory_value: Money,
    /// Σ effective price × stock.
    pub effective_value: Money,
}

impl CatalogStats {
    pub fn compute<'a>(products: impl IntoIterator<Item = &'a Product>, currency: &str) -> Self {
        let mut stats = Self {
            products: 0, total_stock: 0, active: 0, on_hold: 0, out_of_stock: 0, discounted: 0,
            inventory_value: Money::zero(currency), effective_value: Money::zero(currency),
        };
        let (mut list, mut effective) = (Money::zero(currency), Money::zero(currency));
        for p in products {
            stats.products += 1;
            stats.total_stock += u64::from(p.stock());
            match p.status() {
                ProductStatus::Active => stats.active += 1,
                ProductStatus::OnHold => stats.on_hold += 1,
                ProductStatus::OutOfStock => stats.out_of_stock += 1,
            }
            if p.is_discounted() { stats.discounted += 1; }
            // Every term is built in `currency`, so the sums cannot mismatch.
            list = list.checked_add(&Money::new(p.price(), currency).for_stock(p.stock())).unwrap_or(list);
            effective = effective.checked_add(&Money::new(p.effective_price(), currency).for_stock(p.stock())).unwrap_or(effective);
        }
        stats.inventory_value = list;
        stats.effective_value = effective;
        stats
    }
}

/// Values offered by the category, brand and status pickers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub statuses: Vec<String>,
}

impl Facets {
    /// Distinct categories and brands in first-seen order.
    pub fn collect(products: &[Product]) -> Self {
        let mut categories: Vec<String> = Vec::new();
        let mut brands: Vec<String> = Vec::new();
        for p in products {
            if !categories.iter().any(|c| c == p.category()) { categories.push(p.category().to_string()); }
            if !brands.iter().any(|b| b == p.brand()) { brands.push(p.brand().to_string()); }
        }
        let statuses = crate::query::StatusFilter::options().iter().map(ToString::to_string).collect();
        Self { categories, brands, statuses }
    }
}
