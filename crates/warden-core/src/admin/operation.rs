//! Administrative operation and result types.

use serde::Serialize;

/// TTL sentinel meaning "no expiry".
pub const TTL_NO_EXPIRY: i64 = -1;

/// A bulk mutation selected by key pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminOperation {
    /// Delete every matching key.
    Purge,
    /// Rewrite the expiry of every matching key without altering values.
    /// `ttl_seconds == -1` removes the expiry.
    SetTtl { ttl_seconds: i64 },
}

/// Blast-radius report for a pattern, computed fresh on every call.
///
/// Carries no mutation capability: a confirm call re-resolves the pattern
/// against the live store instead of trusting this snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewResult {
    /// The glob pattern as requested.
    pub pattern: String,
    /// Number of keys matching at preview time.
    pub matched_count: usize,
    /// Up to `sample_limit` matched keys, lexicographically ordered.
    pub sample_keys: Vec<String>,
    /// False when `matched_count` exceeds the safety ceiling. Advisory:
    /// callers decide whether an unsafe preview needs an elevated override.
    ///
    /// Safety is judged by match count alone, not pattern shape: a bare `*`
    /// over a store smaller than the ceiling still reads safe.
    pub estimated_safe: bool,
}

/// Result of a confirm call.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmOutcome {
    /// The call arrived without `confirm=true` and degraded to a dry run.
    DryRun(PreviewResult),
    /// Purge executed; `deleted` keys were removed.
    Purged { deleted: usize },
    /// TTL rewrite executed; `updated` keys had their expiry replaced.
    TtlUpdated { updated: usize },
}
