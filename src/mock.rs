//! Built-in fallback dataset, used when neither the rewards API nor the
//! local cache can produce platforms.
//!
//! The offers mirror the real Turkish-market shape: Turkish feature
//! tags, day-count and flexible lockups, and unit-suffixed minimum
//! stakes. APY trends are synthesized per call with small random
//! jitter, the same way the original data source faked its sparklines.

use chrono::Utc;
use rand::Rng;

use crate::models::{Campaign, Platform, StakingOffer};

/// Synthesize a 7-sample APY trend around `base_apy`, oldest first.
///
/// Each sample fluctuates within +/- 10 % of the base and is rounded to
/// two decimals.
pub fn generate_apy_trend(base_apy: f64) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..7)
        .map(|_| {
            let fluctuation = base_apy * 0.1 * rng.gen_range(-1.0..1.0);
            ((base_apy + fluctuation) * 100.0).round() / 100.0
        })
        .collect()
}

/// Derive the 24-hour change (percent, one decimal) from the last two
/// trend samples. Fewer than two samples yields `"0.0"`.
pub fn day_change_from_trend(trend: &[f64]) -> String {
    if trend.len() < 2 {
        return "0.0".to_string();
    }
    let last = trend[trend.len() - 1];
    let previous = trend[trend.len() - 2];
    if previous == 0.0 {
        return "0.0".to_string();
    }
    format!("{:.1}", (last - previous) / previous * 100.0)
}

/// The static fallback platform list.
pub fn mock_platforms() -> Vec<Platform> {
    let now = Utc::now().to_rfc3339();
    vec![
        Platform {
            name: "BtcTurk".to_string(),
            website: "https://www.btcturk.com".to_string(),
            logo_url: Some("/btcturk-logo.png".to_string()),
            staking_offers: vec![
                mock_offer("Tether", "USDT", 8.0, "30", "100 USDT", &["Anlık Bozma", "Günlük Ödeme"], 4.5, "0%", &now),
                mock_offer("Bitcoin", "BTC", 4.5, "60", "0.01 BTC", &["Otomatik Yenileme"], 4.8, "0.2%", &now),
                mock_offer("Ethereum", "ETH", 5.2, "30", "0.1 ETH", &["Esnek Süre"], 4.6, "0.1%", &now),
            ],
            campaigns: vec![Campaign {
                name: "Yeni Üye Bonusu".to_string(),
                description: "Kayıt olun ve KYC tamamlayarak 10 USDT kazanın".to_string(),
                expiry_date: "2026-12-31".to_string(),
                requirements: vec!["Yeni Hesap".to_string(), "KYC Doğrulama".to_string()],
                reward: "10 USDT".to_string(),
                last_updated: now.clone(),
            }],
            last_updated: now.clone(),
        },
        Platform {
            name: "Paribu".to_string(),
            website: "https://www.paribu.com".to_string(),
            logo_url: Some("/paribu-logo.png".to_string()),
            staking_offers: vec![
                mock_offer("Ethereum", "ETH", 7.5, "60", "0.1 ETH", &["Otomatik Yenileme"], 4.2, "0.5%", &now),
                mock_offer("Tether", "USDT", 6.8, "Esnek", "50 USDT", &["Anlık Bozma"], 4.0, "0%", &now),
            ],
            campaigns: vec![],
            last_updated: now,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn mock_offer(
    coin: &str,
    symbol: &str,
    apy: f64,
    lockup: &str,
    min_staking: &str,
    features: &[&str],
    rating: f64,
    fees: &str,
    now: &str,
) -> StakingOffer {
    let trend = generate_apy_trend(apy);
    let day_change = day_change_from_trend(&trend);
    StakingOffer {
        coin: coin.to_string(),
        symbol: symbol.to_string(),
        apy: format!("{apy:.1}"),
        lockup_period: lockup.to_string(),
        min_staking: min_staking.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        last_updated: now.to_string(),
        apy_trend: trend,
        day_change,
        rating,
        fees: fees.to_string(),
        logo_url: None,
    }
}
