//! Campaign queries over the in-memory dataset.
//!
//! Campaigns are carried through the rewards payload untouched by the
//! comparison pipeline; this interface flattens them for the platform
//! detail views.

use chrono::NaiveDate;

use crate::models::{Campaign, Platform};

/// One campaign paired with its owning platform's display name.
#[derive(Debug, Clone)]
pub struct CampaignRow<'a> {
    pub platform: &'a str,
    pub campaign: &'a Campaign,
}

/// Query interface for promotional campaigns, backed by the loaded
/// dataset.
pub struct CampaignQuery<'a> {
    platforms: &'a [Platform],
}

impl<'a> CampaignQuery<'a> {
    /// Create a new `CampaignQuery` over the given dataset.
    pub fn new(platforms: &'a [Platform]) -> Self {
        Self { platforms }
    }

    /// All campaigns in dataset order, each paired with its platform.
    pub fn all(&self) -> Vec<CampaignRow<'a>> {
        self.platforms
            .iter()
            .flat_map(|p| {
                p.campaigns.iter().map(|campaign| CampaignRow {
                    platform: p.name.as_str(),
                    campaign,
                })
            })
            .collect()
    }

    /// Campaigns of one platform (case-insensitive name match), in
    /// dataset order. An unknown platform yields an empty list.
    pub fn for_platform(&self, name: &str) -> Vec<&'a Campaign> {
        self.platforms
            .iter()
            .filter(|p| p.name.eq_ignore_ascii_case(name))
            .flat_map(|p| p.campaigns.iter())
            .collect()
    }

    /// Campaigns whose expiry date is on or after `date`.
    ///
    /// A campaign with an unparseable expiry date is kept (shown until
    /// proven expired).
    pub fn active_on(&self, date: NaiveDate) -> Vec<CampaignRow<'a>> {
        self.all()
            .into_iter()
            .filter(|row| {
                match NaiveDate::parse_from_str(&row.campaign.expiry_date, "%Y-%m-%d") {
                    Ok(expiry) => expiry >= date,
                    Err(_) => true,
                }
            })
            .collect()
    }
}
