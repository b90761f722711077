//! Background cache health sampling.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::interval;
use tracing::{info, warn};
use warden_core::cache::{CacheHealthMonitor, PermissionCache};

use crate::metrics::cache::record_cache_stats;

/// Configuration for the health sampler.
#[derive(Debug, Clone)]
pub struct SamplerConfig {
    /// Interval between samples.
    pub interval: Duration,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(60),
        }
    }
}

/// Handle for controlling a running sampler.
pub struct SamplerHandle {
    /// Sender to signal shutdown.
    shutdown_tx: watch::Sender<bool>,
}

impl SamplerHandle {
    /// Signals the sampler to stop.
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(true);
    }
}

impl Drop for SamplerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Periodically snapshots cache stats, mirrors them into gauges and logs
/// whatever the health monitor classifies.
///
/// The monitor itself is pure; this task only decides the cadence and routes
/// the advisory warnings to the structured log.
pub struct HealthSampler {
    cache: Arc<PermissionCache>,
    monitor: Arc<CacheHealthMonitor>,
    config: SamplerConfig,
}

impl HealthSampler {
    /// Creates a new sampler.
    pub fn new(
        cache: Arc<PermissionCache>,
        monitor: Arc<CacheHealthMonitor>,
        config: SamplerConfig,
    ) -> Self {
        Self {
            cache,
            monitor,
            config,
        }
    }

    /// Starts the background sampling task.
    ///
    /// Returns a handle that can be used to stop the sampler.
    pub fn start(self) -> SamplerHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = SamplerHandle { shutdown_tx };

        tokio::spawn(self.run(shutdown_rx));

        handle
    }

    /// Runs the sampling loop.
    async fn run(self, mut shutdown_rx: watch::Receiver<bool>) {
        let mut ticker = interval(self.config.interval);

        info!(
            "Starting cache health sampler with interval {:?}",
            self.config.interval
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.sample();
                }
                result = shutdown_rx.changed() => {
                    if result.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Cache health sampler stopped");
    }

    fn sample(&self) {
        let stats = self.cache.stats();
        record_cache_stats(&stats);

        for warning in self.monitor.evaluate(&stats) {
            warn!(
                hits = stats.hits,
                misses = stats.misses,
                size = stats.size,
                remediation = warning.remediation(),
                "{warning}"
            );
        }
    }
}
