use serde::{Deserialize, Serialize};

use crate::models::{Platform, StakingOffer};

// ---------------------------------------------------------------------------
// Row — the flattened platform+offer unit
// ---------------------------------------------------------------------------

/// One flattened platform+offer pairing, the unit the comparison-table
/// pipeline filters, sorts and pages over.
///
/// A row has no identity beyond its `(platform, symbol)` pair. It is
/// recomputed from the nested dataset on every pipeline run and never
/// mutated in place; the offer's display strings (including `apy_trend`
/// and `features`) are carried verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    /// Owning platform's display name.
    pub platform: String,
    pub website: String,
    pub platform_logo_url: Option<String>,
    #[serde(flatten)]
    pub offer: StakingOffer,
}

/// Expand a nested `Platform` list into a flat row list.
///
/// Rows appear in input order: platforms in dataset order, offers within
/// a platform in offer order. The output length always equals the sum of
/// `staking_offers` lengths. Empty input yields an empty list.
pub fn flatten(platforms: &[Platform]) -> Vec<Row> {
    let mut rows = Vec::with_capacity(platforms.iter().map(|p| p.staking_offers.len()).sum());
    for platform in platforms {
        for offer in &platform.staking_offers {
            rows.push(Row {
                platform: platform.name.clone(),
                website: platform.website.clone(),
                platform_logo_url: platform.logo_url.clone(),
                offer: offer.clone(),
            });
        }
    }
    rows
}
