//! Query pipeline over the record store.

pub mod engine;
pub mod predicate;
pub mod sort;

pub use engine::{apply, filter_and_sort, PageRequest, PageWindow, QueryResult, DEFAULT_PAGE_SIZE};
pub use predicate::{FilterState, Predicate, StatusFilter};
pub use sort::{SortDirection, SortField, SortState};
