//! TableView session tests: the stage composition plus the windowing
//! contract (filter/search changes reset the window, sort changes keep it).

mod common;

use stakerewards_sdk::config::PAGE_SIZE;
use stakerewards_sdk::table::{
    FilterState, SortDirection, SortKey, SortState, TableConfig, TableView,
};

fn big_dataset() -> Vec<stakerewards_sdk::models::Platform> {
    // 5 platforms x 5 offers = 25 rows, APYs all distinct
    (0..5)
        .map(|p| {
            common::platform(
                &format!("Platform{p}"),
                (0..5)
                    .map(|o| {
                        common::offer(
                            "Tether",
                            "USDT",
                            &format!("{}.{}", p + 1, o),
                            "30",
                            "10 USDT",
                        )
                    })
                    .collect(),
            )
        })
        .collect()
}

#[test]
fn default_session_sorts_by_apy_descending() {
    let table = TableView::new(&common::sample_platforms());
    assert_eq!(table.sort(), SortState::default());

    let rows = table.visible_rows();
    assert_eq!(rows[0].offer.apy, "8.0");
    assert_eq!(rows[1].offer.apy, "7.5");
}

#[test]
fn filter_change_resets_the_window() {
    let platforms = big_dataset();
    let mut table = TableView::new(&platforms);

    table.load_more();
    assert_eq!(table.visible_count(), 20);

    table.set_filters(FilterState {
        min_apy: Some(2.0),
        ..Default::default()
    });
    assert_eq!(table.visible_count(), PAGE_SIZE);
}

#[test]
fn search_change_resets_the_window() {
    let platforms = big_dataset();
    let mut table = TableView::new(&platforms);

    table.load_more();
    table.set_search("platform1");
    assert_eq!(table.visible_count(), PAGE_SIZE);
    assert!(table.visible_rows().iter().all(|r| r.platform == "Platform1"));
}

#[test]
fn sort_change_preserves_the_window() {
    let platforms = big_dataset();
    let mut table = TableView::new(&platforms);

    table.load_more();
    assert_eq!(table.visible_count(), 20);

    table.request_sort(SortKey::Platform);
    assert_eq!(table.visible_count(), 20);
}

#[test]
fn request_sort_toggles_direction_on_the_same_key() {
    let mut table = TableView::new(&common::sample_platforms());

    table.request_sort(SortKey::Rating);
    assert_eq!(
        table.sort(),
        SortState {
            key: SortKey::Rating,
            direction: SortDirection::Desc
        }
    );

    table.request_sort(SortKey::Rating);
    assert_eq!(table.sort().direction, SortDirection::Asc);

    // A third click returns to descending
    table.request_sort(SortKey::Rating);
    assert_eq!(table.sort().direction, SortDirection::Desc);

    // Switching keys always starts descending
    table.request_sort(SortKey::Apy);
    assert_eq!(table.sort().direction, SortDirection::Desc);
}

#[test]
fn load_more_walks_through_the_result_set() {
    let platforms = big_dataset();
    let mut table = TableView::new(&platforms);
    assert_eq!(table.result_count(), 25);
    assert_eq!(table.visible_rows().len(), 10);
    assert!(table.has_more());

    table.load_more();
    assert_eq!(table.visible_rows().len(), 20);

    table.load_more();
    assert_eq!(table.visible_rows().len(), 25);
    assert!(!table.has_more());

    table.load_more();
    assert_eq!(table.visible_rows().len(), 25);
}

#[test]
fn visible_rows_are_a_prefix_of_results() {
    let platforms = big_dataset();
    let mut table = TableView::new(&platforms);
    table.load_more();

    let results = table.results();
    let visible = table.visible_rows();
    assert_eq!(
        common::keys(&visible),
        common::keys(&results[..visible.len()])
    );
}

#[test]
fn clear_filters_restores_the_full_result_set() {
    let mut table = TableView::new(&common::sample_platforms());
    table.set_search("eth");
    table.set_filters(FilterState {
        platform: Some("Paribu".to_string()),
        ..Default::default()
    });
    assert_eq!(table.result_count(), 1);

    table.clear_filters();
    assert_eq!(table.result_count(), 7);
    assert_eq!(table.visible_count(), PAGE_SIZE);
}

#[test]
fn empty_result_set_is_a_valid_state() {
    let mut table = TableView::new(&common::sample_platforms());
    table.set_search("yok böyle bir coin");

    assert_eq!(table.result_count(), 0);
    assert!(table.visible_rows().is_empty());
    assert!(!table.has_more());
}

// ---------------------------------------------------------------------------
// Config round-trip
// ---------------------------------------------------------------------------

#[test]
fn config_snapshot_round_trips_through_json() {
    let platforms = big_dataset();
    let mut table = TableView::new(&platforms);
    table.set_search("platform");
    table.set_filters(FilterState {
        min_apy: Some(2.5),
        symbol: Some("USDT".to_string()),
        ..Default::default()
    });
    table.request_sort(SortKey::Rating);
    table.load_more();

    let json = serde_json::to_string(&table.config()).unwrap();
    let config: TableConfig = serde_json::from_str(&json).unwrap();
    let restored = TableView::with_config(&platforms, config.clone());

    assert_eq!(restored.config(), config);
    assert_eq!(
        common::keys(&restored.visible_rows()),
        common::keys(&table.visible_rows())
    );
}

#[test]
fn config_uses_camel_case_wire_names() {
    let config = TableConfig::default();
    let value = serde_json::to_value(&config).unwrap();

    assert!(value.get("searchQuery").is_some());
    assert!(value.get("minApy").is_some());
    assert!(value.get("maxLockupDays").is_some());
    assert_eq!(value["sortKey"], "apy");
    assert_eq!(value["sortDirection"], "desc");
    assert_eq!(value["visibleCount"], 10);
}
