//! Query engine: filter, sort, then page.

use serde::{Deserialize, Serialize};
use crate::domain::aggregates::Product;
use crate::query::predicate::{matches_all, FilterState};
use crate::query::sort::SortState;

pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Pagination cursor. Pages are 1-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub current_page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(current_page: usize, page_size: usize) -> Self { Self { current_page, page_size } }
    pub fn first(page_size: usize) -> Self { Self::new(1, page_size) }
}

impl Default for PageRequest {
    fn default() -> Self { Self::first(DEFAULT_PAGE_SIZE) }
}

/// 1-based item span shown on the current page. `start` is 0 when nothing matched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QueryResult {
    pub items: Vec<Product>,
    pub total_filtered: usize,
    pub total_pages: usize,
    /// The page actually served after clamping.
    pub current_page: usize,
    pub window: PageWindow,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool { self.total_filtered == 0 }
    pub fn has_previous(&self) -> bool { self.current_page > 1 }
    pub fn has_next(&self) -> bool { self.current_page < self.total_pages }
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Filtered records in store order, then sorted. Ties keep store order.
pub fn filter_and_sort<'a>(records: &'a [Product], filter: &FilterState, sort: &SortState) -> Vec<&'a Product> {
    let predicates = filter.predicates();
    let mut matched: Vec<&Product> = records.iter().filter(|p| matches_all(&predicates, p)).collect();
    sort.sort(&mut matched);
    matched
}

/// Derives the visible page from the records and the current view state.
///
/// Pure: identical inputs always produce identical output. A page beyond the
/// last one is clamped rather than rejected, and a zero page size is treated as 1.
pub fn apply(records: &[Product], filter: &FilterState, sort: &SortState, page: &PageRequest) -> QueryResult {
    let matched = filter_and_sort(records, filter, sort);
    let page_size = page.page_size.max(1);
    let total_filtered = matched.len();
    let total_pages = total_pages(total_filtered, page_size);
    let current_page = page.current_page.clamp(1, total_pages);

    let start = ((current_page - 1) * page_size).min(total_filtered);
    let end = (start + page_size).min(total_filtered);
    let items: Vec<Product> = matched[start..end].iter().map(|p| (*p).clone()).collect();

    let window = if items.is_empty() {
        PageWindow { start: 0, end: 0, total: total_filtered }
    } else {
        PageWindow { start: start + 1, end, total: total_filtered }
    };

    tracing::trace!(total_filtered, total_pages, current_page, "query applied");
    QueryResult { items, total_filtered, total_pages, current_page, window }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SeedCatalog;
    use crate::domain::aggregates::ProductStatus;
    use crate::domain::value_objects::PriceRange;
    use crate::query::predicate::StatusFilter;
    use crate::query::sort::{SortDirection, SortField};
    use rust_decimal::Decimal;

    fn ids(items: &[Product]) -> Vec<&str> { items.iter().map(|p| p.id()).collect() }

    #[test]
    fn test_no_filters_returns_store_order() {
        let records = SeedCatalog::records();
        let r = apply(&records, &FilterState::default(), &SortState::default(), &PageRequest::default());
        assert_eq!(r.total_filtered, 8);
        assert_eq!(r.total_pages, 1);
        assert_eq!(r.items, records);
        assert_eq!(r.window, PageWindow { start: 1, end: 8, total: 8 });
    }

    #[test]
    fn test_search_sneakers() {
        let records = SeedCatalog::records();
        let mut f = FilterState::default();
        f.search_term = "sneakers".into();
        let r = apply(&records, &f, &SortState::default(), &PageRequest::default());
        assert_eq!(ids(&r.items), ["SCR32405", "B324FDS2", "C4D532S8", "AE24E52G"]);
    }

    #[test]
    fn test_status_on_hold() {
        let records = SeedCatalog::records();
        let mut f = FilterState::default();
        f.status = StatusFilter::Only(ProductStatus::OnHold);
        let r = apply(&records, &f, &SortState::default(), &PageRequest::default());
        assert_eq!(r.total_filtered, 1);
        assert_eq!(r.items[0].name(), "Running Pro Max White");
    }

    #[test]
    fn test_price_range_under_2000() {
        let records = SeedCatalog::records();
        let mut f = FilterState::default();
        f.price_range = PriceRange::up_to(Decimal::new(2000, 0)).unwrap();
        let r = apply(&records, &f, &SortState::default(), &PageRequest::default());
        assert_eq!(ids(&r.items), ["MN45Q87T"]);
    }

    #[test]
    fn test_empty_result() {
        let records = SeedCatalog::records();
        let mut f = FilterState::default();
        f.search_term = "no such shoe".into();
        let r = apply(&records, &f, &SortState::default(), &PageRequest::new(3, 8));
        assert!(r.items.is_empty());
        assert_eq!(r.total_filtered, 0);
        assert_eq!(r.total_pages, 1);
        assert_eq!(r.current_page, 1);
        assert_eq!(r.window, PageWindow { start: 0, end: 0, total: 0 });
        assert!(r.is_empty());
    }

    #[test]
    fn test_page_is_clamped_and_last_page_truncated() {
        let records = SeedCatalog::records();
        let r = apply(&records, &FilterState::default(), &SortState::default(), &PageRequest::new(99, 3));
        assert_eq!(r.total_pages, 3);
        assert_eq!(r.current_page, 3);
        assert_eq!(ids(&r.items), ["PQ38R72X", "ST63W91Y"]);
        assert_eq!(r.window, PageWindow { start: 7, end: 8, total: 8 });
        assert!(r.has_previous());
        assert!(!r.has_next());

        let r = apply(&records, &FilterState::default(), &SortState::default(), &PageRequest::new(0, 3));
        assert_eq!(r.current_page, 1);
    }

    #[test]
    fn test_idempotent() {
        let records = SeedCatalog::records();
        let mut f = FilterState::default();
        f.categories.insert("Sneakers".into());
        let s = SortState::new(SortField::Price, SortDirection::Descending);
        let p = PageRequest::new(1, 3);
        assert_eq!(apply(&records, &f, &s, &p), apply(&records, &f, &s, &p));
    }

    #[test]
    fn test_pages_cover_filtered_sequence() {
        let records = SeedCatalog::records();
        let s = SortState::new(SortField::Brand, SortDirection::Ascending);
        let f = FilterState::default();
        let expected: Vec<Product> = filter_and_sort(&records, &f, &s).into_iter().cloned().collect();
        for page_size in 1..=9 {
            let first = apply(&records, &f, &s, &PageRequest::first(page_size));
            let mut all = Vec::new();
            for page in 1..=first.total_pages {
                all.extend(apply(&records, &f, &s, &PageRequest::new(page, page_size)).items);
            }
            assert_eq!(all, expected, "page size {}", page_size);
        }
    }

    #[test]
    fn test_narrowing_never_grows_result() {
        let records = SeedCatalog::records();
        let mut f = FilterState::default();
        let mut last = apply(&records, &f, &SortState::default(), &PageRequest::default()).total_filtered;
        assert!(last <= records.len());
        for max in [4000, 3000, 2700, 2000, 1000] {
            f.price_range = PriceRange::up_to(Decimal::new(max, 0)).unwrap();
            let n = apply(&records, &f, &SortState::default(), &PageRequest::default()).total_filtered;
            assert!(n <= last);
            last = n;
        }
        let mut f = FilterState::default();
        f.brands.insert("Zamoran".into());
        let brand_only = apply(&records, &f, &SortState::default(), &PageRequest::default()).total_filtered;
        f.categories.insert("Sneakers".into());
        let both = apply(&records, &f, &SortState::default(), &PageRequest::default()).total_filtered;
        assert_eq!(brand_only, 3);
        assert!(both <= brand_only);
    }

    #[test]
    fn test_sort_by_price_both_directions() {
        let records = SeedCatalog::records();
        let f = FilterState::default();
        let asc = apply(&records, &f, &SortState::new(SortField::Price, SortDirection::Ascending), &PageRequest::default());
        let prices: Vec<i64> = asc.items.iter().map(|p| p.price().mantissa() as i64).collect();
        assert_eq!(prices, [1950, 2436, 2628, 2642, 2868, 3250, 3850, 4250]);
        let desc = apply(&records, &f, &SortState::new(SortField::Price, SortDirection::Descending), &PageRequest::default());
        let mut reversed = asc.items.clone();
        reversed.reverse();
        assert_eq!(desc.items, reversed);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 8), 1);
        assert_eq!(total_pages(8, 8), 1);
        assert_eq!(total_pages(9, 8), 2);
        assert_eq!(total_pages(5, 0), 5);
    }
}
