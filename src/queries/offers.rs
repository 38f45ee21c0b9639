//! Staking-offer queries over the in-memory platform dataset.

use crate::models::Platform;
use crate::table::{filter_rows_with, flatten, sort_rows, FilterState, Row, SortState};

// ---------------------------------------------------------------------------
// SearchOffersParams
// ---------------------------------------------------------------------------

/// Parameters for the offer search.
///
/// All fields are optional. When `None` (or empty, for `query`), the
/// corresponding filter is skipped. `sort` defaults to APY descending.
#[derive(Debug, Clone, Default)]
pub struct SearchOffersParams {
    /// Case-insensitive substring match over platform name, coin name,
    /// symbol and feature tags.
    pub query: Option<String>,
    /// Inclusive lower bound on APY, in percentage points.
    pub min_apy: Option<f64>,
    /// Inclusive upper bound on lockup days; flexible lockups always pass.
    pub max_lockup_days: Option<u32>,
    /// Exact ticker match.
    pub symbol: Option<String>,
    /// Exact platform display-name match.
    pub platform: Option<String>,
    pub sort: Option<SortState>,
    /// Truncate the sorted result to at most this many rows.
    pub limit: Option<usize>,
}

impl SearchOffersParams {
    fn filter_state(&self) -> FilterState {
        FilterState {
            min_apy: self.min_apy,
            max_lockup_days: self.max_lockup_days,
            symbol: self.symbol.clone(),
            platform: self.platform.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// OfferQuery
// ---------------------------------------------------------------------------

/// Query interface for staking offers, backed by the loaded dataset.
pub struct OfferQuery<'a> {
    platforms: &'a [Platform],
}

impl<'a> OfferQuery<'a> {
    /// Create a new `OfferQuery` over the given dataset.
    pub fn new(platforms: &'a [Platform]) -> Self {
        Self { platforms }
    }

    /// All offers flattened into rows, in dataset order.
    pub fn all(&self) -> Vec<Row> {
        flatten(self.platforms)
    }

    /// Run the filter and sort stages over the whole dataset.
    pub fn search(&self, params: &SearchOffersParams) -> Vec<Row> {
        self.search_with(params, |_| true)
    }

    /// Like [`search`](Self::search), with an extra view-specific
    /// predicate AND-composed onto the structured filters.
    pub fn search_with<F>(&self, params: &SearchOffersParams, extra: F) -> Vec<Row>
    where
        F: Fn(&Row) -> bool,
    {
        let rows = flatten(self.platforms);
        let query = params.query.as_deref().unwrap_or("");
        let filtered = filter_rows_with(&rows, query, &params.filter_state(), extra);
        let sort = params.sort.unwrap_or_default();
        let mut sorted = sort_rows(&filtered, sort.key, sort.direction);
        if let Some(limit) = params.limit {
            sorted.truncate(limit);
        }
        sorted
    }

    // -- Distinct values (filter-control population) ------------------------

    /// Distinct coin display names across all offers, sorted.
    pub fn distinct_coins(&self) -> Vec<String> {
        distinct(
            self.platforms
                .iter()
                .flat_map(|p| p.staking_offers.iter().map(|o| o.coin.clone())),
        )
    }

    /// Distinct tickers across all offers, sorted.
    pub fn distinct_symbols(&self) -> Vec<String> {
        distinct(
            self.platforms
                .iter()
                .flat_map(|p| p.staking_offers.iter().map(|o| o.symbol.clone())),
        )
    }

    /// Distinct platform display names, sorted.
    pub fn distinct_platforms(&self) -> Vec<String> {
        distinct(self.platforms.iter().map(|p| p.name.clone()))
    }
}

fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut values: Vec<String> = values.collect();
    values.sort();
    values.dedup();
    values
}
