//! Range-Sum Memoization
//!
//! Sums over closed index ranges of a mutable array, memoized in the bounded
//! cache under interval keys. A point update rewrites the array and drops
//! every cached sum whose interval covers the mutated index, so the cache
//! never serves a stale sum.

use tracing::debug;

use crate::cache::{BoundedCache, CacheStats, IntervalKey};
use crate::error::{MemoError, Result};

// == Range Sum Memo ==
/// Mutable integer array with interval-sum memoization.
#[derive(Debug)]
pub struct RangeSumMemo {
    /// Backing array
    values: Vec<i64>,
    /// Memoized sums keyed by closed index interval
    cache: BoundedCache<IntervalKey, i64>,
}

impl RangeSumMemo {
    // == Constructor ==
    /// Creates a memoized range-sum engine over `values`.
    ///
    /// # Arguments
    /// * `values` - The backing array (may be empty)
    /// * `cache_capacity` - Maximum number of memoized sums; must be at least 1
    pub fn new(values: Vec<i64>, cache_capacity: usize) -> Result<Self> {
        Ok(Self {
            values,
            cache: BoundedCache::new(cache_capacity)?,
        })
    }

    // == Range Sum ==
    /// Returns the sum of `values[low..=high]`, serving from the cache when
    /// the interval was computed before and not invalidated since.
    ///
    /// # Errors
    /// Returns `MemoError::InvalidRange` when `low > high` or `high` is out
    /// of bounds.
    pub fn range_sum(&mut self, low: usize, high: usize) -> Result<i64> {
        if low > high || high >= self.values.len() {
            return Err(MemoError::InvalidRange {
                low,
                high,
                len: self.values.len(),
            });
        }

        let key = IntervalKey::new(low as i64, high as i64);
        if let Some(&sum) = self.cache.lookup(&key) {
            return Ok(sum);
        }

        let sum = self.values[low..=high].iter().sum();
        self.cache.store(key, sum);
        Ok(sum)
    }

    // == Update ==
    /// Writes `value` at `index` and invalidates every cached sum whose
    /// interval covers that index.
    ///
    /// # Errors
    /// Returns `MemoError::IndexOutOfBounds` for an index past the array.
    pub fn update(&mut self, index: usize, value: i64) -> Result<()> {
        if index >= self.values.len() {
            return Err(MemoError::IndexOutOfBounds {
                index,
                len: self.values.len(),
            });
        }

        self.values[index] = value;
        let dropped = self.cache.invalidate_range(index as i64);
        debug!(index, dropped, "point update invalidated cached sums");
        Ok(())
    }

    // == Element Access ==
    /// Returns the current value at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    // == Length ==
    /// Returns the length of the backing array.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // == Cache Stats ==
    /// Returns statistics for the underlying sum cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
