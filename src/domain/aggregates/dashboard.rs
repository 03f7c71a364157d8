//! Dashboard Aggregate
//!
//! Owns the view state of one catalog session: filter selections, sort,
//! pagination cursor and row selection. Every mutating transition re-runs the
//! query engine synchronously, so `view()` always reflects the current state.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeSet;
use uuid::Uuid;
use crate::catalog::{RecordProvider, RecordStore};
use crate::config::DashboardConfig;
use crate::domain::aggregates::{PriceTag, Product};
use crate::domain::events::{DashboardEvent, FilterEvent};
use crate::domain::value_objects::PriceRange;
use crate::intent::Intent;
use crate::query::{apply, filter_and_sort, FilterState, PageRequest, PageWindow, QueryResult, SortField, SortState, StatusFilter};
use crate::stats::{CatalogStats, Facets};
use crate::{CatalogError, Result};

#[derive(Clone, Debug)]
pub struct Dashboard {
    id: String,
    store: RecordStore,
    currency: String,
    filter: FilterState,
    sort: SortState,
    page: PageRequest,
    selection: BTreeSet<String>,
    view: QueryResult,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    events: Vec<DashboardEvent>,
}

/// Read-only state handed to the presentation layer after each transition.
#[derive(Clone, Debug, Serialize)]
pub struct DashboardSnapshot {
    pub session_id: String,
    pub page_items: Vec<Product>,
    pub total_filtered: usize,
    pub total_pages: usize,
    pub window: PageWindow,
    pub filter: FilterState,
    pub sort: SortState,
    pub pagination: PageRequest,
    pub selection: Vec<String>,
    pub applied_filters: usize,
    pub stats: CatalogStats,
    pub updated_at: DateTime<Utc>,
}

/// Everything the detail dialog shows for one product.
#[derive(Clone, Debug, Serialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub price_tag: PriceTag,
    pub selected: bool,
}

impl Dashboard {
    pub fn new(store: RecordStore, config: &DashboardConfig) -> Self {
        let now = Utc::now();
        let filter = FilterState::new(config.price_bounds());
        let sort = SortState::default();
        let page = PageRequest::first(config.page_size.max(1));
        let view = apply(store.records(), &filter, &sort, &page);
        let dashboard = Self {
            id: Uuid::new_v4().to_string(), store, currency: config.currency.clone(),
            filter, sort, page, selection: BTreeSet::new(), view,
            created_at: now, updated_at: now, events: vec![],
        };
        tracing::info!(session = %dashboard.id, records = dashboard.store.len(), page_size = dashboard.page.page_size, "dashboard session started");
        dashboard
    }

    pub fn from_provider(provider: &dyn RecordProvider, config: &DashboardConfig) -> Result<Self> {
        Ok(Self::new(RecordStore::load(provider)?, config))
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn currency(&self) -> &str { &self.currency }
    pub fn records(&self) -> &[Product] { self.store.records() }
    pub fn filter(&self) -> &FilterState { &self.filter }
    pub fn sort(&self) -> &SortState { &self.sort }
    pub fn pagination(&self) -> &PageRequest { &self.page }
    pub fn selection(&self) -> &BTreeSet<String> { &self.selection }
    pub fn view(&self) -> &QueryResult { &self.view }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }
    pub fn product(&self, id: &str) -> Option<&Product> { self.store.get(id) }

    pub fn detail(&self, id: &str) -> Result<ProductDetail> {
        let product = self.store.get(id).ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))?;
        Ok(ProductDetail {
            product: product.clone(),
            price_tag: product.price_tag(&self.currency),
            selected: self.selection.contains(id),
        })
    }

    // -------------------------------------------------------------------------
    // Filter transitions: each one resets the cursor to page 1
    // -------------------------------------------------------------------------

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.filter.search_term = term.clone();
        self.filters_changed(FilterEvent::SearchChanged { term });
    }

    pub fn set_status_filter(&mut self, status: impl Into<StatusFilter>) {
        let status = status.into();
        self.filter.status = status;
        self.filters_changed(FilterEvent::StatusChanged { status });
    }

    pub fn toggle_category(&mut self, category: &str) {
        let selected = toggle(&mut self.filter.categories, category);
        self.filters_changed(FilterEvent::CategoryToggled { category: category.to_string(), selected });
    }

    pub fn toggle_brand(&mut self, brand: &str) {
        let selected = toggle(&mut self.filter.brands, brand);
        self.filters_changed(FilterEvent::BrandToggled { brand: brand.to_string(), selected });
    }

    /// Rejects `min > max` or negative bounds without touching any state.
    pub fn set_price_range(&mut self, min: Decimal, max: Decimal) -> Result<()> {
        let range = PriceRange::new(min, max)?;
        self.filter.price_range = range;
        self.filters_changed(FilterEvent::PriceRangeChanged { min, max });
        Ok(())
    }

    /// Resets filters only; sort and selection survive.
    pub fn clear_filters(&mut self) {
        self.filter.reset();
        self.filters_changed(FilterEvent::Cleared);
    }

    // -------------------------------------------------------------------------
    // Sort and pagination
    // -------------------------------------------------------------------------

    pub fn set_sort(&mut self, field: SortField) {
        self.sort = self.sort.cycle(field);
        self.sort_changed();
    }

    /// Sorts by column id. Unknown columns revert to natural order.
    pub fn set_sort_by_name(&mut self, column: &str) {
        match SortField::parse(column) {
            Some(field) => self.set_sort(field),
            None => {
                tracing::warn!(column, "unknown sort column, using natural order");
                self.sort = SortState::default();
                self.sort_changed();
            }
        }
    }

    /// Moves to page `n`. Out-of-range pages are ignored; returns whether the page changed.
    pub fn change_page(&mut self, n: usize) -> bool {
        if n < 1 || n > self.view.total_pages {
            tracing::debug!(page = n, total_pages = self.view.total_pages, "page out of range, ignored");
            return false;
        }
        let from = self.page.current_page;
        self.page.current_page = n;
        self.refresh();
        self.raise_event(DashboardEvent::PageChanged { from, to: n });
        true
    }

    pub fn set_page_size(&mut self, size: usize) -> Result<()> {
        if size == 0 { return Err(CatalogError::InvalidPageSize); }
        self.page = PageRequest::first(size);
        self.refresh();
        self.raise_event(DashboardEvent::PageSizeChanged { page_size: size });
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Selection: never feeds the query engine
    // -------------------------------------------------------------------------

    pub fn toggle_selection(&mut self, id: &str) -> Result<()> {
        if !self.store.contains(id) { return Err(CatalogError::ProductNotFound(id.to_string())); }
        toggle(&mut self.selection, id);
        self.selection_changed();
        Ok(())
    }

    /// True when every row on the displayed page is selected and the page is not empty.
    pub fn is_page_selected(&self) -> bool {
        !self.view.items.is_empty() && self.view.items.iter().all(|p| self.selection.contains(p.id()))
    }

    /// Selects every row on the displayed page, or clears the selection when
    /// the page is already fully selected.
    pub fn toggle_select_all(&mut self) {
        if self.view.items.iter().all(|p| self.selection.contains(p.id())) {
            self.selection.clear();
        } else {
            self.selection = self.view.items.iter().map(|p| p.id().to_string()).collect();
        }
        self.selection_changed();
    }

    /// Selected records in store order.
    pub fn selected_products(&self) -> Vec<&Product> {
        self.store.records().iter().filter(|p| self.selection.contains(p.id())).collect()
    }

    // -------------------------------------------------------------------------
    // Derived data
    // -------------------------------------------------------------------------

    /// Statistics over the whole filtered set, not just the current page.
    pub fn stats(&self) -> CatalogStats {
        CatalogStats::compute(filter_and_sort(self.store.records(), &self.filter, &self.sort), &self.currency)
    }

    pub fn catalog_stats(&self) -> CatalogStats { CatalogStats::compute(self.store.records(), &self.currency) }

    pub fn facets(&self) -> Facets { Facets::collect(self.store.records()) }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            session_id: self.id.clone(),
            page_items: self.view.items.clone(),
            total_filtered: self.view.total_filtered,
            total_pages: self.view.total_pages,
            window: self.view.window,
            filter: self.filter.clone(),
            sort: self.sort,
            pagination: self.page,
            selection: self.selection.iter().cloned().collect(),
            applied_filters: self.filter.applied_count(),
            stats: self.stats(),
            updated_at: self.updated_at,
        }
    }

    /// Applies a serialized intent through the matching transition.
    pub fn dispatch(&mut self, intent: Intent) -> Result<()> {
        match intent {
            Intent::SetSearchTerm { term } => self.set_search_term(term),
            Intent::SetStatusFilter { status } => self.set_status_filter(status),
            Intent::ToggleCategory { category } => self.toggle_category(&category),
            Intent::ToggleBrand { brand } => self.toggle_brand(&brand),
            Intent::SetPriceRange { min, max } => self.set_price_range(min, max)?,
            Intent::ClearFilters => self.clear_filters(),
            Intent::SetSort { field } => self.set_sort_by_name(&field),
            Intent::ChangePage { page } => { self.change_page(page); }
            Intent::SetPageSize { size } => self.set_page_size(size)?,
            Intent::ToggleSelection { id } => self.toggle_selection(&id)?,
            Intent::ToggleSelectAll => self.toggle_select_all(),
        }
        Ok(())
    }

    pub fn take_events(&mut self) -> Vec<DashboardEvent> { std::mem::take(&mut self.events) }

    fn filters_changed(&mut self, event: FilterEvent) {
        tracing::debug!(?event, "filter changed");
        self.page.current_page = 1;
        self.refresh();
        self.raise_event(DashboardEvent::Filter(event));
    }

    fn sort_changed(&mut self) {
        tracing::debug!(field = ?self.sort.field, direction = ?self.sort.direction, "sort changed");
        self.refresh();
        self.raise_event(DashboardEvent::SortChanged { field: self.sort.field, direction: self.sort.direction });
    }

    fn selection_changed(&mut self) {
        self.touch();
        self.raise_event(DashboardEvent::SelectionChanged { selected: self.selection.len() });
    }

    fn refresh(&mut self) {
        self.view = apply(self.store.records(), &self.filter, &self.sort, &self.page);
        self.page.current_page = self.view.current_page;
        self.touch();
    }

    fn raise_event(&mut self, e: DashboardEvent) { self.events.push(e); }
    fn touch(&mut self) { self.updated_at = Utc::now(); }
}

/// Symmetric set toggle; returns whether the value is now present.
fn toggle(set: &mut BTreeSet<String>, value: &str) -> bool {
    if set.remove(value) { false } else { set.insert(value.to_string()) }
}
