//! Filter predicates.
//!
//! Each predicate class is one independent filter dimension. `FilterState`
//! produces the list of active predicates and a record passes when every one
//! of them holds. Category and brand selections match any member of the set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use crate::domain::aggregates::{Product, ProductStatus};
use crate::domain::value_objects::PriceRange;

/// Status filter selection: everything, or a single status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProductStatus),
}

impl StatusFilter {
    /// Options in the order the status picker shows them.
    pub fn options() -> Vec<StatusFilter> {
        std::iter::once(Self::All).chain(ProductStatus::ALL.into_iter().map(Self::Only)).collect()
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(status) => f.write_str(status.label()),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") { return Ok(Self::All); }
        s.parse().map(Self::Only)
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> { value.parse() }
}

impl From<StatusFilter> for String {
    fn from(value: StatusFilter) -> Self { value.to_string() }
}

impl From<ProductStatus> for StatusFilter {
    fn from(value: ProductStatus) -> Self { Self::Only(value) }
}

/// One filter dimension evaluated against a single record.
#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    /// Lowercased term matched against name or id.
    Text(String),
    Status(ProductStatus),
    Categories(BTreeSet<String>),
    Brands(BTreeSet<String>),
    /// Inclusive range over list price.
    Price(PriceRange),
}

impl Predicate {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Predicate::Text(term) => {
                product.name().to_lowercase().contains(term.as_str()) || product.id().to_lowercase().contains(term.as_str())
            }
            Predicate::Status(status) => product.status() == *status,
            Predicate::Categories(set) => set.contains(product.category()),
            Predicate::Brands(set) => set.contains(product.brand()),
            Predicate::Price(range) => range.contains(product.price()),
        }
    }
}

/// True when the product satisfies every predicate.
pub fn matches_all(predicates: &[Predicate], product: &Product) -> bool {
    predicates.iter().all(|p| p.matches(product))
}

/// Current filter selections.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FilterState {
    pub search_term: String,
    pub status: StatusFilter,
    pub categories: BTreeSet<String>,
    pub brands: BTreeSet<String>,
    pub price_range: PriceRange,
    /// The full range; a `price_range` equal to it constrains nothing.
    pub price_bounds: PriceRange,
}

impl FilterState {
    pub fn new(price_bounds: PriceRange) -> Self {
        Self {
            search_term: String::new(),
            status: StatusFilter::All,
            categories: BTreeSet::new(),
            brands: BTreeSet::new(),
            price_range: price_bounds,
            price_bounds,
        }
    }

    /// Restores every selection to its neutral value, keeping the bounds.
    pub fn reset(&mut self) { *self = Self::new(self.price_bounds); }

    pub fn is_price_constrained(&self) -> bool { self.price_range != self.price_bounds }

    /// Active predicates in evaluation order. Neutral selections contribute nothing.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut out = Vec::with_capacity(5);
        if !self.search_term.is_empty() {
            out.push(Predicate::Text(self.search_term.to_lowercase()));
        }
        if let StatusFilter::Only(status) = self.status {
            out.push(Predicate::Status(status));
        }
        if !self.categories.is_empty() {
            out.push(Predicate::Categories(self.categories.clone()));
        }
        if !self.brands.is_empty() {
            out.push(Predicate::Brands(self.brands.clone()));
        }
        if self.is_price_constrained() {
            out.push(Predicate::Price(self.price_range));
        }
        out
    }

    /// Number of non-text filter classes in use, for the filter badge.
    pub fn applied_count(&self) -> usize {
        [
            self.status != StatusFilter::All,
            !self.categories.is_empty(),
            !self.brands.is_empty(),
            self.is_price_constrained(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

impl Default for FilterState {
    fn default() -> Self {
        // Slider ceiling the dashboard ships with.
        Self::new(PriceRange::zero_to(5000))
    }
}
