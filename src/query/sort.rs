//! Sort state and comparators.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use crate::domain::aggregates::Product;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField { Name, Brand, Year, Status, Stock, Price }

impl SortField {
    /// Parses a column id. Unknown columns yield `None`.
    pub fn parse(column: &str) -> Option<Self> {
        match column.trim().to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "brand" => Some(Self::Brand),
            "year" | "yearproduced" => Some(Self::Year),
            "status" => Some(Self::Status),
            "stock" | "inventory" => Some(Self::Stock),
            "price" => Some(Self::Price),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Brand => "brand",
            Self::Year => "year",
            Self::Status => "status",
            Self::Stock => "stock",
            Self::Price => "price",
        }
    }

    /// Compares two records on this field in ascending order.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
            Self::Brand => a.brand().to_lowercase().cmp(&b.brand().to_lowercase()),
            Self::Year => a.year_key().cmp(&b.year_key()),
            Self::Status => a.status().label().to_lowercase().cmp(&b.status().label().to_lowercase()),
            Self::Stock => a.stock().cmp(&b.stock()),
            Self::Price => a.price().cmp(&b.price()),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
    #[default]
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self { Self { field: Some(field), direction } }

    /// Header-click transition: a new column starts ascending, the current
    /// column flips between ascending and descending.
    pub fn cycle(&self, clicked: SortField) -> Self {
        let direction = if self.field == Some(clicked) && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Self::new(clicked, direction)
    }

    /// The comparator in effect, or `None` when natural order applies.
    pub fn comparator(&self) -> Option<impl Fn(&Product, &Product) -> Ordering> {
        let field = self.field?;
        let descending = match self.direction {
            SortDirection::Ascending => false,
            SortDirection::Descending => true,
            SortDirection::None => return None,
        };
        Some(move |a: &Product, b: &Product| {
            let ord = field.compare(a, b);
            if descending { ord.reverse() } else { ord }
        })
    }

    /// Stable in-place sort; ties keep their incoming order in both directions.
    pub fn sort(&self, items: &mut [&Product]) {
        if let Some(cmp) = self.comparator() {
            items.sort_by(|a, b| cmp(*a, *b));
        }
    }
}
