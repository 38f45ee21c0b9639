//! The search/filter stage of the comparison-table pipeline.
//!
//! All criteria are optional; an absent criterion passes every row.
//! Active criteria AND-combine, and each is a pure predicate, so the
//! result is independent of evaluation order. No filter ever panics:
//! a row whose numeric field cannot be parsed simply fails the
//! corresponding filter.

use serde::{Deserialize, Serialize};

use super::coerce::{parse_apy, parse_lockup, Lockup};
use super::row::Row;

// ---------------------------------------------------------------------------
// FilterState
// ---------------------------------------------------------------------------

/// Structured filter criteria for the comparison table.
///
/// The coin filter matches on `symbol` (the ticker), which is the
/// canonical identifier for offer selection throughout this SDK.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Inclusive lower bound on APY, in percentage points.
    pub min_apy: Option<f64>,
    /// Inclusive upper bound on lockup days. Flexible-lockup rows always
    /// pass regardless of the bound.
    pub max_lockup_days: Option<u32>,
    /// Exact, case-sensitive ticker match (`"ETH"`, `"USDT"`, ...).
    pub symbol: Option<String>,
    /// Exact platform display-name match.
    pub platform: Option<String>,
}

impl FilterState {
    /// True when no criterion is set, i.e. filtering is a no-op.
    pub fn is_empty(&self) -> bool {
        self.min_apy.is_none()
            && self.max_lockup_days.is_none()
            && self.symbol.is_none()
            && self.platform.is_none()
    }

    /// Apply every active structured criterion to one row.
    pub fn matches(&self, row: &Row) -> bool {
        if let Some(min_apy) = self.min_apy {
            match parse_apy(&row.offer.apy) {
                Some(apy) if apy >= min_apy => {}
                _ => return false,
            }
        }
        if let Some(max_days) = self.max_lockup_days {
            match parse_lockup(&row.offer.lockup_period) {
                Some(Lockup::Flexible) => {}
                Some(Lockup::Days(days)) if days <= max_days => {}
                _ => return false,
            }
        }
        if let Some(symbol) = &self.symbol {
            if &row.offer.symbol != symbol {
                return false;
            }
        }
        if let Some(platform) = &self.platform {
            if &row.platform != platform {
                return false;
            }
        }
        true
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Apply the free-text query and structured filters to a row list.
///
/// Returns a fresh list; the input is never mutated. The result is
/// always a subset of `rows` in input order.
pub fn filter_rows(rows: &[Row], query: &str, filters: &FilterState) -> Vec<Row> {
    filter_rows_with(rows, query, filters, |_| true)
}

/// Like [`filter_rows`], with an extra view-specific predicate.
///
/// Views that carry additional criteria (asset category, chain, ...)
/// compose them here instead of duplicating the pipeline.
pub fn filter_rows_with<F>(rows: &[Row], query: &str, filters: &FilterState, extra: F) -> Vec<Row>
where
    F: Fn(&Row) -> bool,
{
    rows.iter()
        .filter(|row| matches_query(row, query) && filters.matches(row) && extra(row))
        .cloned()
        .collect()
}

/// Case-insensitive substring search over platform name, coin name,
/// symbol, and feature tags. An empty query passes every row.
pub fn matches_query(row: &Row, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    row.platform.to_lowercase().contains(&query)
        || row.offer.coin.to_lowercase().contains(&query)
        || row.offer.symbol.to_lowercase().contains(&query)
        || row
            .offer
            .features
            .iter()
            .any(|f| f.to_lowercase().contains(&query))
}
