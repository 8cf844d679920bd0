//! Memocache - in-memory memoization backends
//!
//! Provides a self-adjusting splay tree and a capacity-bounded LRU cache
//! with interval-key range invalidation, plus sample memoization drivers.

pub mod cache;
pub mod config;
pub mod error;
pub mod memo;
pub mod tree;

pub use cache::{BoundedCache, CacheStats, IntervalKey};
pub use config::Config;
pub use error::{MemoError, Result};
pub use tree::SplayTree;
