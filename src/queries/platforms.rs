//! Platform queries over the in-memory dataset.

use crate::error::{Result, StakingError};
use crate::models::Platform;

/// Query interface for platforms, backed by the loaded dataset.
pub struct PlatformQuery<'a> {
    platforms: &'a [Platform],
}

impl<'a> PlatformQuery<'a> {
    /// Create a new `PlatformQuery` over the given dataset.
    pub fn new(platforms: &'a [Platform]) -> Self {
        Self { platforms }
    }

    /// All platforms in dataset order.
    pub fn list(&self) -> &[Platform] {
        self.platforms
    }

    /// Look up one platform by its display name (case-insensitive,
    /// matching the backend's per-platform endpoint).
    pub fn get_by_name(&self, name: &str) -> Result<&'a Platform> {
        self.platforms
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| StakingError::NotFound(format!("Unknown platform: {name}")))
    }

    /// Platform display names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.platforms.iter().map(|p| p.name.clone()).collect();
        names.sort();
        names
    }
}
