//! Error types for the key-value store and the pattern-admin operator.

/// Errors raised by a key-value store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store cannot be reached.
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    /// The backend rejected or failed an individual operation.
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Creates a new unavailable error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Returns true if this is a transient error that might succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

/// Errors raised by administrative pattern operations.
///
/// Validation variants are surfaced before any store round-trip; `Partial`
/// reports how far a multi-key mutation got before the store failed. Both
/// purge and TTL rewrite are idempotent per key, so a failed operation can be
/// re-run with the same request.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// The pattern is empty, too long, or not a valid glob.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The TTL is outside the accepted range.
    #[error("invalid ttl {ttl}: expected -1 (no expiry) or a value in 1..={max_ttl} seconds")]
    InvalidTtl { ttl: i64, max_ttl: u64 },

    /// The store failed before any key was mutated.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The store failed partway through a multi-key mutation.
    ///
    /// The operation is not atomic across keys; `completed` keys were already
    /// processed when the failure occurred.
    #[error("operation stopped after {completed} keys: {source}")]
    Partial {
        completed: usize,
        #[source]
        source: StoreError,
    },
}

impl AdminError {
    /// Creates a new invalid-pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}
