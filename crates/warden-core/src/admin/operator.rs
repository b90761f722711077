//! Pattern-scoped administrative operator.
//!
//! The operator mutates potentially many keys in a shared store by glob
//! match, so every mutation is gated behind a preview → confirm protocol:
//! a call without `confirmed = true` is observably a preview, and a
//! confirmed call re-resolves the pattern against the live store instead of
//! trusting any earlier snapshot.

use std::sync::Arc;
use std::time::Duration;

use glob::Pattern;
use tracing::{info, warn};

use crate::admin::operation::{AdminOperation, ConfirmOutcome, PreviewResult, TTL_NO_EXPIRY};
use crate::error::AdminError;
use crate::store::KeyValueStore;

/// Safety limits for pattern operations.
#[derive(Debug, Clone)]
pub struct OperatorConfig {
    /// Above this many matched keys, `estimated_safe` turns false.
    pub safety_ceiling: usize,
    /// Maximum number of sample keys in a preview.
    pub sample_limit: usize,
    /// Upper bound for a rewritten TTL.
    pub max_ttl: Duration,
    /// Maximum accepted pattern length, in characters.
    pub max_pattern_len: usize,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            safety_ceiling: 500,
            sample_limit: 20,
            max_ttl: Duration::from_secs(30 * 24 * 60 * 60),
            max_pattern_len: 200,
        }
    }
}

/// Stateless operator over an externally-owned key-value store.
///
/// Owns no store data and keeps no per-operation state; preview and confirm
/// are independent store round-trips. Nothing here is atomic across keys
/// (see [`AdminError::Partial`]) and nothing is retried automatically; both
/// purge and TTL rewrite are idempotent per key, so callers may safely re-run
/// a failed request.
pub struct PatternAdminOperator {
    store: Arc<dyn KeyValueStore>,
    config: OperatorConfig,
}

impl PatternAdminOperator {
    /// Creates an operator with custom limits.
    pub fn new(store: Arc<dyn KeyValueStore>, config: OperatorConfig) -> Self {
        Self { store, config }
    }

    /// Creates an operator with the default limits.
    pub fn with_defaults(store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(store, OperatorConfig::default())
    }

    /// Reports what a pattern-scoped operation would affect. Never mutates,
    /// idempotent, may be called any number of times.
    pub async fn preview(&self, pattern: &str) -> Result<PreviewResult, AdminError> {
        self.validate_pattern(pattern)?;

        let keys = self.resolve(pattern).await?;
        let preview = self.build_preview(pattern, keys);

        if !preview.estimated_safe {
            warn!(
                pattern = %pattern,
                matched = preview.matched_count,
                ceiling = self.config.safety_ceiling,
                "pattern matches more keys than the safety ceiling"
            );
        }

        Ok(preview)
    }

    /// Executes (or dry-runs) a pattern-scoped operation.
    ///
    /// Validation happens before any store access. With `confirmed = false`
    /// the call degrades to a second preview and mutates nothing. With
    /// `confirmed = true` the pattern is re-resolved fresh; keys added or
    /// removed since an earlier preview are picked up here.
    pub async fn confirm(
        &self,
        pattern: &str,
        operation: AdminOperation,
        confirmed: bool,
    ) -> Result<ConfirmOutcome, AdminError> {
        self.validate_pattern(pattern)?;

        // Reject an out-of-range TTL before touching the store.
        let ttl = match operation {
            AdminOperation::SetTtl { ttl_seconds } => self.validate_ttl(ttl_seconds)?,
            AdminOperation::Purge => None,
        };

        let keys = self.resolve(pattern).await?;

        if !confirmed {
            return Ok(ConfirmOutcome::DryRun(self.build_preview(pattern, keys)));
        }

        match operation {
            AdminOperation::Purge => {
                let mut deleted = 0;
                for (processed, key) in keys.iter().enumerate() {
                    match self.store.delete(key).await {
                        Ok(true) => deleted += 1,
                        Ok(false) => {}
                        Err(source) => {
                            return Err(AdminError::Partial {
                                completed: processed,
                                source,
                            });
                        }
                    }
                }

                info!(pattern = %pattern, deleted = deleted, "purge confirmed");
                Ok(ConfirmOutcome::Purged { deleted })
            }
            AdminOperation::SetTtl { ttl_seconds } => {
                let mut updated = 0;
                for (processed, key) in keys.iter().enumerate() {
                    match self.store.set_ttl(key, ttl).await {
                        Ok(true) => updated += 1,
                        Ok(false) => {}
                        Err(source) => {
                            return Err(AdminError::Partial {
                                completed: processed,
                                source,
                            });
                        }
                    }
                }

                info!(
                    pattern = %pattern,
                    ttl_seconds = ttl_seconds,
                    updated = updated,
                    "ttl rewrite confirmed"
                );
                Ok(ConfirmOutcome::TtlUpdated { updated })
            }
        }
    }

    /// Validates a TTL request: `-1` means no expiry, anything else must be
    /// positive and within the configured maximum.
    pub fn validate_ttl(&self, ttl_seconds: i64) -> Result<Option<Duration>, AdminError> {
        if ttl_seconds == TTL_NO_EXPIRY {
            return Ok(None);
        }

        let max_ttl = self.config.max_ttl.as_secs();
        if ttl_seconds <= 0 || ttl_seconds as u64 > max_ttl {
            return Err(AdminError::InvalidTtl {
                ttl: ttl_seconds,
                max_ttl,
            });
        }

        Ok(Some(Duration::from_secs(ttl_seconds as u64)))
    }

    fn validate_pattern(&self, pattern: &str) -> Result<(), AdminError> {
        if pattern.is_empty() {
            return Err(AdminError::invalid_pattern(pattern, "pattern is empty"));
        }

        if pattern.chars().count() > self.config.max_pattern_len {
            return Err(AdminError::invalid_pattern(
                pattern,
                format!("pattern exceeds {} characters", self.config.max_pattern_len),
            ));
        }

        Pattern::new(pattern)
            .map_err(|e| AdminError::invalid_pattern(pattern, e.to_string()))?;

        Ok(())
    }

    /// Resolves the pattern against the live store, sorted for deterministic
    /// sampling.
    async fn resolve(&self, pattern: &str) -> Result<Vec<String>, AdminError> {
        let mut keys = self.store.scan_keys(pattern).await?;
        keys.sort();
        Ok(keys)
    }

    fn build_preview(&self, pattern: &str, keys: Vec<String>) -> PreviewResult {
        let matched_count = keys.len();
        let estimated_safe = matched_count <= self.config.safety_ceiling;
        let sample_keys = keys
            .into_iter()
            .take(self.config.sample_limit)
            .collect();

        PreviewResult {
            pattern: pattern.to_string(),
            matched_count,
            sample_keys,
            estimated_safe,
        }
    }
}
