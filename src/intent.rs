//! User intents reported by the presentation layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::query::StatusFilter;

/// Serialized form of every dashboard transition.
///
/// ```json
/// {"type": "set_search_term", "term": "sneakers"}
/// {"type": "set_sort", "field": "price"}
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    SetSearchTerm { term: String },
    SetStatusFilter { status: StatusFilter },
    ToggleCategory { category: String },
    ToggleBrand { brand: String },
    SetPriceRange { min: Decimal, max: Decimal },
    ClearFilters,
    /// Column id; unknown columns fall back to natural order.
    SetSort { field: String },
    ChangePage { page: usize },
    SetPageSize { size: usize },
    ToggleSelection { id: String },
    ToggleSelectAll,
}
