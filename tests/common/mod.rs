//! Shared fixtures for the stakerewards-sdk integration tests.
//!
//! Provides deterministic sample platforms (no random trend jitter) plus
//! small constructors for ad-hoc offers and rows.

#![allow(dead_code)]

use stakerewards_sdk::models::{Campaign, Platform, StakingOffer};
use stakerewards_sdk::table::{flatten, Row};

pub const FIXED_TS: &str = "2026-08-01T00:00:00Z";

/// Build an offer with the load-bearing fields set and sane defaults
/// for the rest.
pub fn offer(coin: &str, symbol: &str, apy: &str, lockup: &str, min_staking: &str) -> StakingOffer {
    StakingOffer {
        coin: coin.to_string(),
        symbol: symbol.to_string(),
        apy: apy.to_string(),
        lockup_period: lockup.to_string(),
        min_staking: min_staking.to_string(),
        features: vec![],
        last_updated: FIXED_TS.to_string(),
        apy_trend: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
        day_change: "0.0".to_string(),
        rating: 4.0,
        fees: "0%".to_string(),
        logo_url: None,
    }
}

pub fn offer_with_features(
    coin: &str,
    symbol: &str,
    apy: &str,
    lockup: &str,
    min_staking: &str,
    features: &[&str],
) -> StakingOffer {
    StakingOffer {
        features: features.iter().map(|f| f.to_string()).collect(),
        ..offer(coin, symbol, apy, lockup, min_staking)
    }
}

pub fn platform(name: &str, offers: Vec<StakingOffer>) -> Platform {
    Platform {
        name: name.to_string(),
        website: format!("https://www.{}.com", name.to_lowercase()),
        logo_url: None,
        staking_offers: offers,
        campaigns: vec![],
        last_updated: FIXED_TS.to_string(),
    }
}

pub fn campaign(name: &str, expiry_date: &str) -> Campaign {
    Campaign {
        name: name.to_string(),
        description: format!("{name} kampanyası"),
        expiry_date: expiry_date.to_string(),
        requirements: vec!["Yeni Hesap".to_string()],
        reward: "10 USDT".to_string(),
        last_updated: FIXED_TS.to_string(),
    }
}

/// Three platforms, seven offers: fixed and flexible lockups (both
/// spellings), Turkish feature tags, and one row each with an
/// unparseable APY and an unparseable lockup.
pub fn sample_platforms() -> Vec<Platform> {
    vec![
        Platform {
            campaigns: vec![campaign("Yeni Üye Bonusu", "2026-12-31")],
            ..platform(
                "BtcTurk",
                vec![
                    offer_with_features(
                        "Tether",
                        "USDT",
                        "8.0",
                        "30",
                        "100 USDT",
                        &["Anlık Bozma", "Günlük Ödeme"],
                    ),
                    offer_with_features(
                        "Bitcoin",
                        "BTC",
                        "4.5",
                        "60",
                        "0.01 BTC",
                        &["Otomatik Yenileme"],
                    ),
                    offer_with_features("Ethereum", "ETH", "5.2", "Esnek", "0.1 ETH", &["Esnek Süre"]),
                ],
            )
        },
        platform(
            "Paribu",
            vec![
                offer("Ethereum", "ETH", "7.5", "60", "0.1 ETH"),
                offer("Avalanche", "AVAX", "N/A", "Flexible", "1 AVAX"),
            ],
        ),
        platform(
            "Stakely",
            vec![
                offer("Solana", "SOL", "6.1", "bilinmiyor", "1 SOL"),
                offer("Tether", "USDT", "6.8", "7", "50 USDT"),
            ],
        ),
    ]
}

/// Build a single ad-hoc row without going through a platform.
pub fn offer_row(platform_name: &str, coin: &str, symbol: &str, apy: &str, lockup: &str) -> Row {
    Row {
        platform: platform_name.to_string(),
        website: format!("https://www.{}.com", platform_name.to_lowercase()),
        platform_logo_url: None,
        offer: offer(coin, symbol, apy, lockup, "1 UNIT"),
    }
}

/// The sample platforms pre-flattened.
pub fn sample_rows() -> Vec<Row> {
    flatten(&sample_platforms())
}

/// Convenience: collect `(platform, symbol)` pairs for order assertions.
pub fn keys(rows: &[Row]) -> Vec<(String, String)> {
    rows.iter()
        .map(|r| (r.platform.clone(), r.offer.symbol.clone()))
        .collect()
}
