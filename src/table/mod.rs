//! The comparison-table pipeline: flatten, filter, sort, paginate.
//!
//! Four pure, composable stages over the nested platform dataset:
//!
//! 1. [`flatten`] expands platforms into flat [`Row`]s;
//! 2. [`filter_rows`] applies the free-text query and [`FilterState`];
//! 3. [`sort_rows`] stable-sorts by a [`SortKey`];
//! 4. [`visible_slice`] / [`Pager`] window the result ("load more").
//!
//! Stages 1-3 recompute from scratch on every state change (the data
//! volumes are tens to low hundreds of rows); stage 4 is pure slicing.
//! Every stage is a total function: malformed numeric fields fail
//! filters rather than raising, and nothing here performs I/O or
//! mutates its input.
//!
//! [`TableView`] packages the four stages plus their state into one
//! session object that enforces the windowing contract (the visible
//! window resets whenever filters or the search query change, and only
//! then).

pub mod coerce;
pub mod filter;
pub mod page;
pub mod row;
pub mod sort;

pub use coerce::Lockup;
pub use filter::{filter_rows, filter_rows_with, matches_query, FilterState};
pub use page::{visible_slice, Pager};
pub use row::{flatten, Row};
pub use sort::{sort_rows, SortDirection, SortKey, SortState};

use serde::{Deserialize, Serialize};

use crate::config::PAGE_SIZE;
use crate::models::Platform;

// ---------------------------------------------------------------------------
// TableConfig
// ---------------------------------------------------------------------------

/// Serializable snapshot of a table session's full filter/sort/window
/// state. This is the only configuration surface the pipeline has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    pub search_query: String,
    pub min_apy: Option<f64>,
    pub max_lockup_days: Option<u32>,
    pub symbol: Option<String>,
    pub platform: Option<String>,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    pub visible_count: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        let sort = SortState::default();
        Self {
            search_query: String::new(),
            min_apy: None,
            max_lockup_days: None,
            symbol: None,
            platform: None,
            sort_key: sort.key,
            sort_direction: sort.direction,
            visible_count: PAGE_SIZE,
        }
    }
}

// ---------------------------------------------------------------------------
// TableView
// ---------------------------------------------------------------------------

/// One comparison-table session over a fixed dataset.
///
/// Owns the flattened row list plus the current search, filter, sort
/// and window state, and re-runs the pipeline on demand. State changes
/// follow the table's behavioral contract:
///
/// - changing filters or the search query resets the visible window to
///   the first page;
/// - changing the sort order preserves the window (re-sorting a table
///   the user has already expanded keeps it expanded).
#[derive(Debug, Clone)]
pub struct TableView {
    rows: Vec<Row>,
    search: String,
    filters: FilterState,
    sort: SortState,
    pager: Pager,
}

impl TableView {
    /// Start a session over a nested platform dataset with default
    /// state (no filters, APY descending, first page visible).
    pub fn new(platforms: &[Platform]) -> Self {
        Self::from_rows(flatten(platforms))
    }

    /// Start a session over pre-flattened rows.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self {
            rows,
            search: String::new(),
            filters: FilterState::default(),
            sort: SortState::default(),
            pager: Pager::new(),
        }
    }

    /// Restore a session from a serialized [`TableConfig`].
    pub fn with_config(platforms: &[Platform], config: TableConfig) -> Self {
        Self {
            rows: flatten(platforms),
            search: config.search_query,
            filters: FilterState {
                min_apy: config.min_apy,
                max_lockup_days: config.max_lockup_days,
                symbol: config.symbol,
                platform: config.platform,
            },
            sort: SortState {
                key: config.sort_key,
                direction: config.sort_direction,
            },
            pager: Pager::with_visible(config.visible_count),
        }
    }

    // -- State changes ------------------------------------------------------

    /// Set the free-text search query. Resets the visible window.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.pager.reset();
    }

    /// Replace the structured filters. Resets the visible window.
    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.pager.reset();
    }

    /// Drop all filters and the search query. Resets the visible window.
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.filters = FilterState::default();
        self.pager.reset();
    }

    /// Set an explicit sort order. Preserves the visible window.
    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
    }

    /// Column-header sort toggle: a new key sorts descending; clicking
    /// the current key flips descending to ascending and back.
    pub fn request_sort(&mut self, key: SortKey) {
        let direction = if self.sort.key == key && self.sort.direction == SortDirection::Desc {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        };
        self.sort = SortState { key, direction };
    }

    /// Grow the visible window by one page, clamped to the current
    /// result count. A no-op once everything is visible.
    pub fn load_more(&mut self) {
        let total = self.results().len();
        self.pager.load_more(total);
    }

    // -- Derived output -----------------------------------------------------

    /// The full filtered and sorted result set.
    pub fn results(&self) -> Vec<Row> {
        let filtered = filter_rows(&self.rows, &self.search, &self.filters);
        sort_rows(&filtered, self.sort.key, self.sort.direction)
    }

    /// The visible prefix of [`results`](Self::results) under the
    /// current window.
    pub fn visible_rows(&self) -> Vec<Row> {
        let mut results = self.results();
        results.truncate(self.pager.visible_count());
        results
    }

    /// Number of rows the current filters match (before windowing).
    pub fn result_count(&self) -> usize {
        filter_rows(&self.rows, &self.search, &self.filters).len()
    }

    /// True while the window hides part of the result set; hosts render
    /// the "load more" control only while this holds.
    pub fn has_more(&self) -> bool {
        self.pager.has_more(self.result_count())
    }

    // -- State accessors ----------------------------------------------------

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn visible_count(&self) -> usize {
        self.pager.visible_count()
    }

    /// Snapshot the session state as a serializable [`TableConfig`].
    pub fn config(&self) -> TableConfig {
        TableConfig {
            search_query: self.search.clone(),
            min_apy: self.filters.min_apy,
            max_lockup_days: self.filters.max_lockup_days,
            symbol: self.filters.symbol.clone(),
            platform: self.filters.platform.clone(),
            sort_key: self.sort.key,
            sort_direction: self.sort.direction,
            visible_count: self.pager.visible_count(),
        }
    }
}
