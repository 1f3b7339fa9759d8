//! Background refresher: periodically fetches the provider catalog and merges it into the registry.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::error::{FetchError, LimitsError};
use crate::registry::LimitsRegistry;
use crate::source::InstanceTypeSource;

/// Refreshes a [`LimitsRegistry`] from an [`InstanceTypeSource`], once or on an interval.
pub struct LimitsRefresher {
    registry: Arc<LimitsRegistry>,
    source: Arc<dyn InstanceTypeSource>,
    interval: Duration,
    timeout: Option<Duration>,
}

impl LimitsRefresher {
    /// Create a refresher that will run every `interval`.
    pub fn new(
        registry: Arc<LimitsRegistry>,
        source: Arc<dyn InstanceTypeSource>,
        interval: Duration,
    ) -> Self {
        Self {
            registry,
            source,
            interval,
            timeout: None,
        }
    }

    /// Bound each fetch by `timeout`. The merge itself is never interrupted.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Time between refreshes in [`spawn`](Self::spawn).
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Run a single refresh. Returns the number of entries written.
    pub async fn refresh_once(&self) -> Result<usize, LimitsError> {
        let update = self.registry.update_from_api(self.source.as_ref());
        match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, update)
                .await
                .map_err(|_| LimitsError::Fetch(FetchError::Timeout))?,
            None => update.await,
        }
    }

    /// Spawn the background refresh loop. Returns a handle that can be used to abort.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                match self.refresh_once().await {
                    Ok(updated) => {
                        tracing::debug!(updated, "instance limits refreshed from provider API")
                    }
                    Err(e) => tracing::warn!(error = %e, "instance limits refresh failed"),
                }
            }
        })
    }
}
