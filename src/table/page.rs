//! The pagination/windowing stage ("load more" semantics).
//!
//! The visible window is always a prefix of the sorted result; growing
//! it never reorders or re-runs the upstream stages.

use super::row::Row;
use crate::config::PAGE_SIZE;

/// Return the visible prefix of a sorted result set.
///
/// Clamps to the list length; never reorders.
pub fn visible_slice(rows: &[Row], visible_count: usize) -> &[Row] {
    &rows[..visible_count.min(rows.len())]
}

// ---------------------------------------------------------------------------
// Pager
// ---------------------------------------------------------------------------

/// Monotonically growing visible-row window over one filter/sort session.
///
/// Starts at [`PAGE_SIZE`] rows and grows by [`PAGE_SIZE`] per
/// [`load_more`](Pager::load_more), clamped to the result-set size.
/// The host must [`reset`](Pager::reset) whenever filter state or the
/// search query changes, so the window never skips ahead into a
/// differently-filtered result set ([`TableView`](crate::table::TableView)
/// enforces this).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    visible: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self { visible: PAGE_SIZE }
    }
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a window at an explicit count (e.g. from a serialized
    /// table configuration). Counts below one page are raised to the
    /// initial page size.
    pub fn with_visible(visible: usize) -> Self {
        Self {
            visible: visible.max(PAGE_SIZE),
        }
    }

    pub fn visible_count(&self) -> usize {
        self.visible
    }

    /// Grow the window by one page, clamped to `total`. A no-op once the
    /// whole result set is visible.
    pub fn load_more(&mut self, total: usize) {
        if self.visible >= total {
            return;
        }
        self.visible = (self.visible + PAGE_SIZE).min(total);
    }

    /// Shrink back to the initial page size. Called on every filter or
    /// search change.
    pub fn reset(&mut self) {
        self.visible = PAGE_SIZE;
    }

    /// True while rows beyond the window remain; hosts hide the
    /// "load more" control when this is false.
    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    /// The visible prefix of `rows` under the current window.
    pub fn slice<'a>(&self, rows: &'a [Row]) -> &'a [Row] {
        visible_slice(rows, self.visible)
    }
}
