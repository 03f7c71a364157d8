//! Dashboard events
use crate::query::{SortDirection, SortField, StatusFilter};
use rust_decimal::Decimal;

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardEvent {
    Filter(FilterEvent),
    SortChanged { field: Option<SortField>, direction: SortDirection },
    PageChanged { from: usize, to: usize },
    PageSizeChanged { page_size: usize },
    SelectionChanged { selected: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub enum FilterEvent {
    SearchChanged { term: String },
    StatusChanged { status: StatusFilter },
    CategoryToggled { category: String, selected: bool },
    BrandToggled { brand: String, selected: bool },
    PriceRangeChanged { min: Decimal, max: Decimal },
    Cleared,
}
