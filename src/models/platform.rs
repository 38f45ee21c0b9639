use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Platform — one exchange/provider and its nested offers
// ---------------------------------------------------------------------------

/// One exchange/provider as delivered by the rewards API.
///
/// `name` is the display name and the unique key within a dataset
/// (wire field `platform`). `staking_offers` and `campaigns` preserve
/// the API's ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    #[serde(rename = "platform")]
    pub name: String,
    pub website: String,
    pub logo_url: Option<String>,
    #[serde(default)]
    pub staking_offers: Vec<StakingOffer>,
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
    pub last_updated: String,
}

// ---------------------------------------------------------------------------
// StakingOffer — one staking product under a platform
// ---------------------------------------------------------------------------

/// One staking product.
///
/// The API does not strictly type the numeric fields: `apy`, `day_change`
/// and `fees` are decimal strings, `lockup_period` is either a day count
/// or a flexible-lockup sentinel (`"Esnek"` / `"Flexible"`), and
/// `min_staking` is a quantity followed by a unit (`"0.1 ETH"`). They are
/// kept verbatim here so rendering stays faithful to the wire format;
/// the table pipeline parses them at its own boundary
/// (see [`crate::table::coerce`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingOffer {
    pub coin: String,
    pub symbol: String,
    pub apy: String,
    pub lockup_period: String,
    pub min_staking: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub last_updated: String,
    /// 7-day APY trend samples, oldest first. Display-only; carried
    /// through the pipeline unchanged.
    #[serde(default)]
    pub apy_trend: Vec<f64>,
    pub day_change: String,
    pub rating: f64,
    pub fees: String,
    pub logo_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Campaign — promotional campaign under a platform
// ---------------------------------------------------------------------------

/// A promotional campaign. Not consumed by the comparison pipeline;
/// carried through for the platform detail views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub name: String,
    pub description: String,
    /// ISO `YYYY-MM-DD` date after which the campaign is no longer active.
    pub expiry_date: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub reward: String,
    pub last_updated: String,
}
