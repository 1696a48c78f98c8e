//! Cache Module
//!
//! In-memory key/value cache with per-entry expiry checked lazily on read.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::TtlCache;

// == Public Constants ==
/// TTL applied when `set` is called without one, in milliseconds.
pub const DEFAULT_TTL_MS: u64 = 60_000;
