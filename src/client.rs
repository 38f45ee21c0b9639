//! Blocking HTTP client for the rewards REST API, plus the fallback
//! chain that turns it into a total data source.

use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;

use crate::cache::RewardsCache;
use crate::config;
use crate::error::{Result, StakingError};
use crate::mock;
use crate::models::{ApiResponse, Platform};

// ---------------------------------------------------------------------------
// RewardsClient
// ---------------------------------------------------------------------------

/// Thin client for the rewards endpoints.
///
/// Both endpoints wrap their payload in the `{success, data, error}`
/// envelope; an envelope with `success: false` surfaces as
/// [`StakingError::Api`] (or [`StakingError::NotFound`] for an unknown
/// platform).
pub struct RewardsClient {
    base_url: String,
    timeout: Duration,
    client: Option<Client>,
}

impl RewardsClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        Self {
            base_url,
            timeout,
            client: None,
        }
    }

    /// Lazy HTTP client, created on first use.
    fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            self.client = Some(
                Client::builder()
                    .timeout(self.timeout)
                    .redirect(reqwest::redirect::Policy::limited(10))
                    .build()?,
            );
        }
        Ok(self.client.as_ref().expect("client just initialized"))
    }

    /// `GET {base}/rewards`: all platforms.
    pub fn fetch_all(&mut self) -> Result<Vec<Platform>> {
        let url = config::rewards_url(&self.base_url);
        let resp = self.client()?.get(&url).send()?.error_for_status()?;
        let envelope: ApiResponse<Vec<Platform>> = resp.json()?;
        if !envelope.success {
            return Err(StakingError::Api(
                envelope.error.unwrap_or_else(|| "rewards request failed".to_string()),
            ));
        }
        Ok(envelope.data)
    }

    /// `GET {base}/rewards/{platform}`: one platform.
    ///
    /// The backend answers an unknown platform with a `success: false`
    /// envelope; that maps to [`StakingError::NotFound`].
    pub fn fetch_platform(&mut self, platform: &str) -> Result<Platform> {
        let url = config::platform_rewards_url(&self.base_url, platform);
        let resp = self.client()?.get(&url).send()?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(StakingError::NotFound(format!("Unknown platform: {platform}")));
        }
        let envelope: ApiResponse<Platform> = resp.error_for_status()?.json()?;
        if !envelope.success {
            let message = envelope
                .error
                .unwrap_or_else(|| format!("rewards request for {platform} failed"));
            return Err(StakingError::NotFound(message));
        }
        Ok(envelope.data)
    }
}

// ---------------------------------------------------------------------------
// DataSource — remote -> cached -> static fallback chain
// ---------------------------------------------------------------------------

/// The SDK's platform data source.
///
/// [`load`](Self::load) is total: it tries the remote API first
/// (skipped in offline mode), then a fresh-enough disk cache of the
/// last successful fetch, and finally the built-in static dataset.
/// Upstream failures are logged, never surfaced; consumers always see
/// a resolved platform list.
pub struct DataSource {
    client: RewardsClient,
    cache: Option<RewardsCache>,
    offline: bool,
}

impl DataSource {
    pub fn new(client: RewardsClient, cache: Option<RewardsCache>, offline: bool) -> Self {
        Self {
            client,
            cache,
            offline,
        }
    }

    /// Resolve a platform list via the fallback chain.
    pub fn load(&mut self) -> Vec<Platform> {
        if !self.offline {
            match self.client.fetch_all() {
                Ok(platforms) if !platforms.is_empty() => {
                    debug!("loaded {} platforms from rewards API", platforms.len());
                    if let Some(cache) = &self.cache {
                        cache.store(&platforms);
                    }
                    return platforms;
                }
                Ok(_) => warn!("rewards API returned an empty platform list"),
                Err(e) => warn!("rewards API unavailable: {e}"),
            }
        }

        if let Some(cache) = &self.cache {
            if let Some(platforms) = cache.load_fresh(config::CACHE_MAX_AGE) {
                if !platforms.is_empty() {
                    debug!("serving {} platforms from disk cache", platforms.len());
                    return platforms;
                }
            }
        }

        debug!("serving static fallback dataset");
        mock::mock_platforms()
    }

    /// Fetch one platform from the remote API. Not part of the fallback
    /// chain; fails in offline mode.
    pub fn fetch_platform(&mut self, platform: &str) -> Result<Platform> {
        if self.offline {
            return Err(StakingError::InvalidArgument(
                "cannot fetch a platform in offline mode".to_string(),
            ));
        }
        self.client.fetch_platform(platform)
    }
}
