//! Local disk cache of the last successful `/rewards` payload.
//!
//! Sits between the remote API and the static fallback in the
//! data-source chain: a fresh enough cached payload is served when the
//! API is unreachable or returns nothing. The payload is stored as
//! `rewards.json` next to a `fetched_at.txt` unix-seconds stamp.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::warn;

use crate::error::Result;
use crate::models::Platform;

/// File-backed cache of the most recent platform list.
pub struct RewardsCache {
    cache_dir: PathBuf,
}

impl RewardsCache {
    /// Create a cache rooted at `cache_dir`, creating the directory if
    /// it does not exist.
    pub fn new(cache_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&cache_dir)?;
        Ok(Self { cache_dir })
    }

    fn payload_path(&self) -> PathBuf {
        self.cache_dir.join("rewards.json")
    }

    fn stamp_path(&self) -> PathBuf {
        self.cache_dir.join("fetched_at.txt")
    }

    /// Persist a freshly fetched platform list.
    ///
    /// Writes to a temp file and renames on success, so an interrupted
    /// write never leaves a corrupt payload behind. Failures are logged
    /// and swallowed; caching is best-effort.
    pub fn store(&self, platforms: &[Platform]) {
        let result = (|| -> Result<()> {
            let tmp = self.payload_path().with_extension("json.tmp");
            fs::write(&tmp, serde_json::to_vec(platforms)?)?;
            fs::rename(&tmp, self.payload_path())?;
            fs::write(self.stamp_path(), unix_now().as_secs().to_string())?;
            Ok(())
        })();
        if let Err(e) = result {
            warn!("failed to cache rewards payload: {e}");
        }
    }

    /// Load the cached platform list if it exists and is younger than
    /// `max_age`. A missing, stale, or unreadable cache yields `None`.
    pub fn load_fresh(&self, max_age: Duration) -> Option<Vec<Platform>> {
        let age = self.age()?;
        if age > max_age {
            return None;
        }
        let bytes = fs::read(self.payload_path()).ok()?;
        match serde_json::from_slice(&bytes) {
            Ok(platforms) => Some(platforms),
            Err(e) => {
                warn!("discarding unreadable rewards cache: {e}");
                None
            }
        }
    }

    /// Age of the cached payload, or `None` if nothing is cached.
    pub fn age(&self) -> Option<Duration> {
        let stamp = fs::read_to_string(self.stamp_path()).ok()?;
        let fetched_at = stamp.trim().parse::<u64>().ok()?;
        Some(unix_now().saturating_sub(Duration::from_secs(fetched_at)))
    }

    /// Remove the cached payload and stamp.
    pub fn clear(&self) -> Result<()> {
        for path in [self.payload_path(), self.stamp_path()] {
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}

fn unix_now() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
}
