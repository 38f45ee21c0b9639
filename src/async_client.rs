//! Async wrapper around [`StakingSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free of
//! the blocking HTTP calls the data source makes.
//!
//! # Example
//!
//! ```no_run
//! use stakerewards_sdk::AsyncStakingSdk;
//!
//! async fn list_symbols() -> stakerewards_sdk::Result<Vec<String>> {
//!     let sdk = AsyncStakingSdk::builder().build().await?;
//!
//!     // Run any sync SDK method via closure
//!     sdk.run(|s| Ok(s.offers().distinct_symbols())).await
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{Result, StakingError};
use crate::models::Platform;
use crate::StakingSdk;

// ---------------------------------------------------------------------------
// AsyncStakingSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncStakingSdk`] instance.
pub struct AsyncStakingSdkBuilder {
    api_base_url: Option<String>,
    cache_dir: Option<PathBuf>,
    disk_cache: bool,
    offline: bool,
    timeout: Duration,
}

impl Default for AsyncStakingSdkBuilder {
    fn default() -> Self {
        Self {
            api_base_url: None,
            cache_dir: None,
            disk_cache: true,
            offline: false,
            timeout: Duration::from_secs(10),
        }
    }
}

impl AsyncStakingSdkBuilder {
    /// Set the base URL of the rewards API.
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Set a custom directory for the last-good-payload disk cache.
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable the disk cache entirely.
    pub fn disk_cache(mut self, enabled: bool) -> Self {
        self.disk_cache = enabled;
        self
    }

    /// Enable or disable offline mode.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the async SDK, running the initial dataset load on the
    /// blocking thread pool so it won't block the async event loop.
    pub async fn build(self) -> Result<AsyncStakingSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = StakingSdk::builder();
            if let Some(url) = self.api_base_url {
                builder = builder.api_base_url(url);
            }
            if let Some(dir) = self.cache_dir {
                builder = builder.cache_dir(dir);
            }
            builder = builder
                .disk_cache(self.disk_cache)
                .offline(self.offline)
                .timeout(self.timeout);
            let sdk = builder.build()?;
            Ok(AsyncStakingSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| StakingError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncStakingSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`StakingSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`StakingSdk`] is
/// protected by a [`Mutex`] so refreshes serialize with reads.
pub struct AsyncStakingSdk {
    inner: Arc<Mutex<StakingSdk>>,
}

impl AsyncStakingSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncStakingSdkBuilder {
        AsyncStakingSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&StakingSdk` reference and should return
    /// a `Result<T>`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use stakerewards_sdk::AsyncStakingSdk;
    /// # async fn example() -> stakerewards_sdk::Result<()> {
    /// # let sdk = AsyncStakingSdk::builder().build().await?;
    /// let rows = sdk.run(|s| Ok(s.table().visible_rows())).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&StakingSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| StakingError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| StakingError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Run a sync SDK operation that needs mutable access (refresh,
    /// direct platform fetches).
    pub async fn run_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut StakingSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = sdk
                .lock()
                .map_err(|_| StakingError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| StakingError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Re-run the fallback chain and replace the loaded dataset.
    pub async fn refresh(&self) -> Result<()> {
        self.run_mut(|s| {
            s.refresh();
            Ok(())
        })
        .await
    }

    /// Fetch one platform straight from the rewards API.
    pub async fn fetch_platform(&self, platform: &str) -> Result<Platform> {
        let platform = platform.to_string();
        self.run_mut(move |s| s.fetch_platform(&platform)).await
    }
}
