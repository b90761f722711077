//! Pattern-scoped administrative operations over the shared store.

pub mod operation;
pub mod operator;

// Re-exports
pub use operation::{AdminOperation, ConfirmOutcome, PreviewResult, TTL_NO_EXPIRY};
pub use operator::{OperatorConfig, PatternAdminOperator};
