//! Cache Module
//!
//! Provides a capacity-bounded in-memory cache with LRU eviction and
//! interval-key range invalidation.

mod interval;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use interval::IntervalKey;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::BoundedCache;
