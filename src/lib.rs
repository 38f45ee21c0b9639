//! Staking rewards SDK for the Turkish crypto market.
//!
//! Loads a dataset of exchange platforms and their staking offers from a
//! rewards REST backend (falling back to a local cache of the last good
//! payload, then to a built-in static dataset) and exposes the
//! comparison-table pipeline over it: flattening, free-text search and
//! structured filtering, stable sorting, and "load more" windowing.
//!
//! # Quick start
//!
//! ```no_run
//! use stakerewards_sdk::table::SortKey;
//! use stakerewards_sdk::StakingSdk;
//!
//! let sdk = StakingSdk::builder().build().unwrap();
//!
//! // Stateful comparison-table session
//! let mut table = sdk.table();
//! table.request_sort(SortKey::Apy);
//! for row in table.visible_rows() {
//!     println!("{} {} {}%", row.platform, row.offer.symbol, row.offer.apy);
//! }
//!
//! // One-shot query
//! let symbols = sdk.offers().distinct_symbols();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod mock;
pub mod models;
pub mod queries;
pub mod table;

#[cfg(feature = "async")]
pub use async_client::AsyncStakingSdk;
pub use cache::RewardsCache;
pub use client::{DataSource, RewardsClient};
pub use error::{Result, StakingError};
pub use table::{FilterState, Row, SortDirection, SortKey, SortState, TableView};

use std::path::{Path, PathBuf};
use std::time::Duration;

use models::Platform;

// ---------------------------------------------------------------------------
// StakingSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`StakingSdk`] instance.
///
/// Use [`StakingSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](StakingSdkBuilder::build) to create the SDK.
pub struct StakingSdkBuilder {
    api_base_url: String,
    cache_dir: Option<PathBuf>,
    disk_cache: bool,
    offline: bool,
    timeout: Duration,
}

impl Default for StakingSdkBuilder {
    fn default() -> Self {
        Self {
            api_base_url: config::DEFAULT_API_BASE.to_string(),
            cache_dir: None,
            disk_cache: true,
            offline: false,
            timeout: Duration::from_secs(10),
        }
    }
}

impl StakingSdkBuilder {
    /// Set the base URL of the rewards API.
    ///
    /// Defaults to [`config::DEFAULT_API_BASE`].
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set a custom directory for the last-good-payload disk cache.
    ///
    /// If not set, the platform-appropriate default cache directory is
    /// used (e.g. `~/.cache/stakerewards-sdk` on Linux).
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable the disk cache entirely. Defaults to `true`.
    ///
    /// With the cache disabled the fallback chain is remote -> static.
    pub fn disk_cache(mut self, enabled: bool) -> Self {
        self.disk_cache = enabled;
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, the SDK never contacts the rewards API and serves
    /// cached or static data only. Defaults to `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout. Defaults to 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the SDK and load the platform dataset through the fallback
    /// chain (remote -> cached -> static; offline mode skips remote).
    ///
    /// Loading is total (a dead backend still yields a usable dataset),
    /// so the only failure modes here are configuration errors and an
    /// uncreatable cache directory.
    pub fn build(self) -> Result<StakingSdk> {
        if self.api_base_url.trim().is_empty() {
            return Err(StakingError::InvalidArgument(
                "api_base_url must not be empty".to_string(),
            ));
        }
        let cache = if self.disk_cache {
            let dir = self.cache_dir.unwrap_or_else(config::default_cache_dir);
            Some(RewardsCache::new(dir)?)
        } else {
            None
        };
        let client = RewardsClient::new(self.api_base_url, self.timeout);
        let mut source = DataSource::new(client, cache, self.offline);
        let platforms = source.load();
        Ok(StakingSdk { platforms, source })
    }
}

// ---------------------------------------------------------------------------
// StakingSdk
// ---------------------------------------------------------------------------

/// The main entry point of the SDK.
///
/// Owns the resolved platform dataset for its lifetime (one "page view"
/// worth of data) and hands out borrowing query interfaces plus
/// independent [`TableView`] sessions. Created via
/// [`StakingSdk::builder()`].
pub struct StakingSdk {
    platforms: Vec<Platform>,
    source: DataSource,
}

impl StakingSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> StakingSdkBuilder {
        StakingSdkBuilder::default()
    }

    // -- Query accessors ----------------------------------------------------

    /// Access the staking-offer query interface.
    pub fn offers(&self) -> queries::offers::OfferQuery<'_> {
        queries::offers::OfferQuery::new(&self.platforms)
    }

    /// Access the platform query interface.
    pub fn platforms(&self) -> queries::platforms::PlatformQuery<'_> {
        queries::platforms::PlatformQuery::new(&self.platforms)
    }

    /// Access the campaign query interface.
    pub fn campaigns(&self) -> queries::campaigns::CampaignQuery<'_> {
        queries::campaigns::CampaignQuery::new(&self.platforms)
    }

    /// Start a comparison-table session over the loaded dataset with
    /// default state.
    pub fn table(&self) -> TableView {
        TableView::new(&self.platforms)
    }

    /// Restore a comparison-table session from a serialized
    /// [`table::TableConfig`].
    pub fn table_with_config(&self, config: table::TableConfig) -> TableView {
        TableView::with_config(&self.platforms, config)
    }

    // -- Dataset access -----------------------------------------------------

    /// The loaded platform dataset, in API order.
    pub fn dataset(&self) -> &[Platform] {
        &self.platforms
    }

    /// Re-run the fallback chain and replace the loaded dataset.
    pub fn refresh(&mut self) {
        self.platforms = self.source.load();
    }

    /// Fetch one platform straight from the rewards API, bypassing the
    /// loaded dataset. Fails in offline mode or when the backend does
    /// not know the platform.
    pub fn fetch_platform(&mut self, platform: &str) -> Result<Platform> {
        self.source.fetch_platform(platform)
    }
}
