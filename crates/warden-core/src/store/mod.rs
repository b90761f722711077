//! Key-value store abstraction and the in-memory implementation.

pub mod memory;
pub mod traits;

// Re-exports
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
