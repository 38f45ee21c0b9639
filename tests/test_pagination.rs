//! Pagination/windowing stage tests.

mod common;

use stakerewards_sdk::config::PAGE_SIZE;
use stakerewards_sdk::table::{visible_slice, Pager, Row};

fn many_rows(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| common::offer_row(&format!("P{i:02}"), "Tether", "USDT", "5.0", "30"))
        .collect()
}

#[test]
fn visible_slice_is_a_clamped_prefix() {
    let rows = many_rows(25);

    assert_eq!(visible_slice(&rows, 10).len(), 10);
    assert_eq!(visible_slice(&rows, 25).len(), 25);
    assert_eq!(visible_slice(&rows, 40).len(), 25);
    assert_eq!(visible_slice(&rows, 0).len(), 0);
    assert!(visible_slice(&[], 10).is_empty());
}

#[test]
fn growing_the_window_only_appends() {
    let rows = many_rows(25);

    for n in [0, 5, 10, 24] {
        let smaller = visible_slice(&rows, n);
        let larger = visible_slice(&rows, n + 7);
        assert_eq!(common::keys(larger)[..smaller.len()], common::keys(smaller)[..]);
    }
}

#[test]
fn pager_starts_at_one_page_and_grows_by_pages() {
    let mut pager = Pager::new();
    assert_eq!(pager.visible_count(), PAGE_SIZE);

    pager.load_more(25);
    assert_eq!(pager.visible_count(), 20);

    pager.load_more(25);
    assert_eq!(pager.visible_count(), 25); // clamped

    pager.load_more(25);
    assert_eq!(pager.visible_count(), 25); // no-op at the ceiling
}

#[test]
fn load_more_is_a_noop_when_everything_is_visible() {
    let mut pager = Pager::new();
    pager.load_more(4); // 4 rows, 10 already visible
    assert_eq!(pager.visible_count(), PAGE_SIZE);
    assert!(!pager.has_more(4));
}

#[test]
fn reset_returns_to_the_initial_page_size() {
    let mut pager = Pager::new();
    pager.load_more(50);
    pager.load_more(50);
    assert_eq!(pager.visible_count(), 30);

    pager.reset();
    assert_eq!(pager.visible_count(), PAGE_SIZE);
}

#[test]
fn has_more_tracks_the_window_against_the_total() {
    let mut pager = Pager::new();
    assert!(pager.has_more(25));

    pager.load_more(25);
    pager.load_more(25);
    assert!(!pager.has_more(25));
    assert!(!pager.has_more(0));
}

#[test]
fn pager_slice_never_reorders() {
    let rows = many_rows(15);
    let mut pager = Pager::new();

    let first = pager.slice(&rows);
    assert_eq!(common::keys(first), common::keys(&rows[..10]));

    pager.load_more(rows.len());
    let all = pager.slice(&rows);
    assert_eq!(common::keys(all), common::keys(&rows));
}

#[test]
fn with_visible_raises_small_counts_to_a_full_page() {
    let pager = Pager::with_visible(3);
    assert_eq!(pager.visible_count(), PAGE_SIZE);

    let pager = Pager::with_visible(20);
    assert_eq!(pager.visible_count(), 20);
}
