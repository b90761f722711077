//! Advisory health classification over cache telemetry.

use std::fmt;

use serde::Serialize;

use super::permission_cache::CacheStats;

/// Thresholds for health classification.
#[derive(Debug, Clone)]
pub struct HealthThresholds {
    /// Minimum number of reads before any warning is produced.
    /// Below this sample size the monitor stays quiet to avoid
    /// cold-start false positives.
    pub min_sample: u64,
    /// Hit rate (percent) below which `LowHitRate` fires.
    pub low_hit_rate: f64,
    /// Entry count above which `OversizedCache` fires.
    pub max_entries: usize,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            min_sample: 10,
            low_hit_rate: 50.0,
            max_entries: 100,
        }
    }
}

/// An advisory warning about cache behaviour. Never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HealthWarning {
    /// More than half of the reads are missing the cache.
    LowHitRate { hit_rate: f64 },
    /// The cache holds more entries than expected.
    OversizedCache { size: usize },
}

impl HealthWarning {
    /// Remediation hint for operators.
    pub fn remediation(&self) -> &'static str {
        match self {
            Self::LowHitRate { .. } => {
                "check invalidation frequency, TTL settings and cold-start warming"
            }
            Self::OversizedCache { .. } => "consider imposing a capacity bound on the cache",
        }
    }
}

impl fmt::Display for HealthWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowHitRate { hit_rate } => {
                write!(f, "cache hit rate is low: {hit_rate:.2}%")
            }
            Self::OversizedCache { size } => {
                write!(f, "cache holds {size} entries")
            }
        }
    }
}

/// Stateless classifier over a [`CacheStats`] snapshot.
///
/// `evaluate` is a pure computation: it never mutates the cache and never
/// fails. The caller decides the sampling cadence.
#[derive(Debug, Clone, Default)]
pub struct CacheHealthMonitor {
    thresholds: HealthThresholds,
}

impl CacheHealthMonitor {
    /// Creates a monitor with custom thresholds.
    pub fn new(thresholds: HealthThresholds) -> Self {
        Self { thresholds }
    }

    /// Creates a monitor with the default thresholds.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Classifies a stats snapshot into zero or more warnings.
    pub fn evaluate(&self, stats: &CacheStats) -> Vec<HealthWarning> {
        let total = stats.hits + stats.misses;
        if total <= self.thresholds.min_sample {
            return Vec::new();
        }

        let mut warnings = Vec::new();

        if stats.hit_rate < self.thresholds.low_hit_rate {
            warnings.push(HealthWarning::LowHitRate {
                hit_rate: stats.hit_rate,
            });
        }

        if stats.size > self.thresholds.max_entries {
            warnings.push(HealthWarning::OversizedCache { size: stats.size });
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(hits: u64, misses: u64, size: usize) -> CacheStats {
        let total = hits + misses;
        let hit_rate = if total == 0 {
            0.0
        } else {
            (hits as f64 / total as f64 * 10_000.0).round() / 100.0
        };

        CacheStats {
            hits,
            misses,
            hit_rate,
            size,
        }
    }

    #[test]
    fn silent_below_sample_floor() {
        let monitor = CacheHealthMonitor::with_defaults();

        // 60% hit rate, but only 5 reads: too small a sample to judge.
        assert!(monitor.evaluate(&stats(3, 2, 0)).is_empty());
        // Exactly at the floor still produces nothing.
        assert!(monitor.evaluate(&stats(1, 9, 0)).is_empty());
    }

    #[test]
    fn low_hit_rate_warns_above_sample_floor() {
        let monitor = CacheHealthMonitor::with_defaults();

        let warnings = monitor.evaluate(&stats(4, 7, 0));

        assert_eq!(
            warnings,
            vec![HealthWarning::LowHitRate { hit_rate: 36.36 }]
        );
    }

    #[test]
    fn healthy_cache_produces_no_warnings() {
        let monitor = CacheHealthMonitor::with_defaults();

        assert!(monitor.evaluate(&stats(90, 10, 50)).is_empty());
    }

    #[test]
    fn oversized_cache_warns() {
        let monitor = CacheHealthMonitor::with_defaults();

        let warnings = monitor.evaluate(&stats(90, 10, 101));

        assert_eq!(warnings, vec![HealthWarning::OversizedCache { size: 101 }]);
    }

    #[test]
    fn both_warnings_can_fire_together() {
        let monitor = CacheHealthMonitor::with_defaults();

        let warnings = monitor.evaluate(&stats(1, 99, 500));

        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| !w.remediation().is_empty()));
    }

    #[test]
    fn custom_thresholds_are_honored() {
        let monitor = CacheHealthMonitor::new(HealthThresholds {
            min_sample: 0,
            low_hit_rate: 90.0,
            max_entries: 1,
        });

        let warnings = monitor.evaluate(&stats(8, 2, 2));

        assert_eq!(warnings.len(), 2);
    }
}
