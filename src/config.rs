use std::path::PathBuf;
use std::time::Duration;

/// Default base URL of the rewards REST API.
///
/// The backend serves `GET {base}/rewards` (all platforms) and
/// `GET {base}/rewards/{platform}` (one platform), both wrapped in the
/// `{success, data, error}` envelope.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Number of rows the comparison table shows initially and adds per
/// "load more" step.
pub const PAGE_SIZE: usize = 10;

/// Maximum age of a cached `/rewards` payload before it is considered
/// stale and skipped by the fallback chain.
pub const CACHE_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

pub fn rewards_url(base: &str) -> String {
    format!("{}/rewards", base.trim_end_matches('/'))
}

pub fn platform_rewards_url(base: &str, platform: &str) -> String {
    format!("{}/rewards/{}", base.trim_end_matches('/'), platform)
}

pub fn default_cache_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("stakerewards-sdk")
    } else {
        PathBuf::from(".stakerewards-sdk-cache")
    }
}
