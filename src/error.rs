//! Error types for the memoization backends
//!
//! Provides unified error handling using thiserror.
//!
//! Key-not-found is deliberately *not* an error: `SplayTree::search` and
//! `BoundedCache::lookup` return `Option`, because absence is a normal
//! outcome for a memoization backend.

use thiserror::Error;

// == Memo Error Enum ==
/// Unified error type for the memocache crate.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MemoError {
    /// Cache constructed with a capacity of zero
    #[error("Invalid capacity: {0} (capacity must be at least 1)")]
    InvalidCapacity(usize),

    /// Range query with out-of-bounds or inverted endpoints
    #[error("Invalid range: [{low}, {high}] for array of length {len}")]
    InvalidRange { low: usize, high: usize, len: usize },

    /// Point update outside the array
    #[error("Index out of bounds: {index} for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

// == Result Type Alias ==
/// Convenience Result type for the memocache crate.
pub type Result<T> = std::result::Result<T, MemoError>;
