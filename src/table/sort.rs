//! The sort stage of the comparison-table pipeline.
//!
//! String keys compare case-insensitively; numeric keys compare by the
//! parsed value, with unparseable values ordering below every parseable
//! one (and equal to each other, so the stable sort keeps them in input
//! order). Sorting never drops, duplicates, or mutates rows.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::coerce::{parse_apy, parse_lockup, parse_min_amount};
use super::row::Row;

// ---------------------------------------------------------------------------
// SortKey / SortDirection
// ---------------------------------------------------------------------------

/// Column the comparison table is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Platform,
    Coin,
    Apy,
    /// Flexible lockups order as zero days.
    Lockup,
    /// Leading quantity of `minStaking` (`"0.1 ETH"` -> `0.1`).
    MinStaking,
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort column plus direction. Defaults to APY descending, the order
/// every comparison view opens with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Apy,
            direction: SortDirection::Desc,
        }
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Stable-sort a row list by `key` in `direction`.
///
/// Returns a fresh list; the input is never mutated. Rows that compare
/// equal keep their relative input order regardless of direction.
pub fn sort_rows(rows: &[Row], key: SortKey, direction: SortDirection) -> Vec<Row> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let ord = compare(a, b, key);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    sorted
}

fn compare(a: &Row, b: &Row, key: SortKey) -> Ordering {
    match key {
        SortKey::Platform => compare_str(&a.platform, &b.platform),
        SortKey::Coin => compare_str(&a.offer.coin, &b.offer.coin),
        SortKey::Apy => compare_opt_f64(parse_apy(&a.offer.apy), parse_apy(&b.offer.apy)),
        SortKey::Lockup => compare_opt_f64(
            parse_lockup(&a.offer.lockup_period).map(|l| f64::from(l.sort_days())),
            parse_lockup(&b.offer.lockup_period).map(|l| f64::from(l.sort_days())),
        ),
        SortKey::MinStaking => compare_opt_f64(
            parse_min_amount(&a.offer.min_staking),
            parse_min_amount(&b.offer.min_staking),
        ),
        SortKey::Rating => compare_opt_f64(Some(a.offer.rating), Some(b.offer.rating)),
    }
}

/// Case-insensitive string ordering, the closest total order to the
/// locale-aware comparison the table columns present.
fn compare_str(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Numeric ordering where an unparseable value sorts below every
/// parseable one. `total_cmp` keeps the comparator a strict total order
/// (the stdlib sort requires one).
fn compare_opt_f64(a: Option<f64>, b: Option<f64>) -> Ordering {
    a.unwrap_or(f64::NEG_INFINITY)
        .total_cmp(&b.unwrap_or(f64::NEG_INFINITY))
}
