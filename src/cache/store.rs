//! Bounded Cache Module
//!
//! Main cache engine combining HashMap storage with LRU recency tracking and
//! interval-key range invalidation.
//!
//! Not internally synchronized: every operation takes `&mut self`, so
//! concurrent callers must serialize access with an external lock per cache.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::cache::{CacheStats, IntervalKey, LruTracker};
use crate::error::{MemoError, Result};

// == Bounded Cache ==
/// Capacity-limited key-value store with LRU eviction.
///
/// Each `store` or successful `lookup` promotes its key to most recently
/// used; when a `store` would push the entry count past `capacity`, the
/// least recently used entry is evicted first. Entry count never exceeds
/// `capacity`.
#[derive(Debug)]
pub struct BoundedCache<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// LRU access tracker
    lru: LruTracker<K>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K: Eq + Hash + Clone, V> BoundedCache<K, V> {
    // == Constructor ==
    /// Creates a new BoundedCache holding at most `capacity` entries.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries; must be at least 1
    ///
    /// # Errors
    /// Returns `MemoError::InvalidCapacity` for a zero capacity. The value
    /// is never silently clamped.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(MemoError::InvalidCapacity(capacity));
        }
        Ok(Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            capacity,
        })
    }

    // == Lookup ==
    /// Retrieves a value by key.
    ///
    /// A hit promotes the entry to most recently used. A miss changes no
    /// cache state beyond the miss counter.
    pub fn lookup(&mut self, key: &K) -> Option<&V> {
        if self.entries.contains_key(key) {
            self.stats.record_hit();
            self.lru.touch(key);
            self.entries.get(key)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Store ==
    /// Inserts or overwrites the entry for `key` and marks it most recently
    /// used.
    ///
    /// If inserting a new key while at capacity, the least recently used
    /// entry is evicted first; a `store` therefore removes at most one entry,
    /// and the incoming key is never the victim.
    pub fn store(&mut self, key: K, value: V) {
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.capacity {
            if let Some(evicted_key) = self.lru.evict_oldest() {
                self.entries.remove(&evicted_key);
                self.stats.record_eviction();
                debug!("evicted least recently used entry");
            }
        }

        self.entries.insert(key.clone(), value);
        self.lru.touch(&key);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Clear ==
    /// Removes all entries unconditionally. Idempotent; the cumulative
    /// hit/miss/eviction counters are retained.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
        self.stats.set_total_entries(0);
    }

    // == Contains ==
    /// Checks for a key without touching recency order or counters.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Capacity ==
    /// Returns the fixed capacity set at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Keys By Recency ==
    /// Iterates over cached keys from most recent to least recent.
    pub fn keys_by_recency(&self) -> impl Iterator<Item = &K> {
        self.lru.keys_by_recency()
    }
}

// == Range Invalidation ==
impl<V> BoundedCache<IntervalKey, V> {
    /// Removes every entry whose interval key covers `point`.
    ///
    /// Used to keep interval-sum caches consistent after a point mutation:
    /// any cached result for `[low, high]` with `low <= point <= high` is
    /// stale and must go. Non-overlapping entries keep their values and
    /// relative recency order. Linear scan over current entries.
    ///
    /// Returns the number of entries removed.
    pub fn invalidate_range(&mut self, point: i64) -> usize {
        let stale_keys: Vec<IntervalKey> = self
            .entries
            .keys()
            .filter(|key| key.covers(point))
            .copied()
            .collect();

        for key in &stale_keys {
            self.entries.remove(key);
            self.lru.remove(key);
            self.stats.record_invalidation();
        }
        self.stats.set_total_entries(self.entries.len());

        if !stale_keys.is_empty() {
            debug!(
                point,
                removed = stale_keys.len(),
                "range invalidation dropped overlapping entries"
            );
        }
        stale_keys.len()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_new() {
        let cache: BoundedCache<u32, String> = BoundedCache::new(100).unwrap();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 100);
    }

    #[test]
    fn test_cache_zero_capacity_rejected() {
        let result: Result<BoundedCache<u32, String>> = BoundedCache::new(0);
        assert_eq!(result.err(), Some(MemoError::InvalidCapacity(0)));
    }

    #[test]
    fn test_cache_store_and_lookup() {
        let mut cache = BoundedCache::new(100).unwrap();

        cache.store(1u32, "a".to_string());
        assert_eq!(cache.lookup(&1), Some(&"a".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_lookup_miss() {
        let mut cache: BoundedCache<u32, String> = BoundedCache::new(100).unwrap();

        assert_eq!(cache.lookup(&99), None);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_cache_overwrite_keeps_single_entry() {
        let mut cache = BoundedCache::new(100).unwrap();

        cache.store(1u32, "a");
        cache.store(1u32, "b");

        assert_eq!(cache.lookup(&1), Some(&"b"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_evicts_exactly_one_lru_entry() {
        let mut cache = BoundedCache::new(3).unwrap();

        cache.store(1u32, "a");
        cache.store(2u32, "b");
        cache.store(3u32, "c");

        // Cache is full; storing 4 evicts 1 (least recently used).
        cache.store(4u32, "d");

        assert_eq!(cache.len(), 3);
        assert!(!cache.contains(&1));
        assert!(cache.contains(&2));
        assert!(cache.contains(&3));
        assert!(cache.contains(&4));
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_cache_lookup_refreshes_recency() {
        let mut cache = BoundedCache::new(2).unwrap();

        cache.store(1u32, "a");
        cache.store(2u32, "b");

        // 1 becomes most recent, so 2 is the eviction victim.
        cache.lookup(&1);
        cache.store(3u32, "c");

        assert!(cache.contains(&1));
        assert!(!cache.contains(&2));
        assert!(cache.contains(&3));
    }

    #[test]
    fn test_cache_overwrite_at_capacity_does_not_evict() {
        let mut cache = BoundedCache::new(2).unwrap();

        cache.store(1u32, "a");
        cache.store(2u32, "b");
        cache.store(1u32, "a2");

        assert_eq!(cache.len(), 2);
        assert!(cache.contains(&1));
        assert!(cache.contains(&2));
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn test_cache_clear_is_idempotent() {
        let mut cache = BoundedCache::new(10).unwrap();

        cache.store(1u32, "a");
        cache.store(2u32, "b");

        cache.clear();
        assert!(cache.is_empty());

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.lookup(&1), None);
    }

    #[test]
    fn test_invalidate_range_removes_only_covering_intervals() {
        let mut cache = BoundedCache::new(10).unwrap();

        cache.store(IntervalKey::new(0, 5), 15i64);
        cache.store(IntervalKey::new(2, 8), 40i64);
        cache.store(IntervalKey::new(10, 12), 5i64);

        let removed = cache.invalidate_range(6);

        assert_eq!(removed, 1);
        assert!(!cache.contains(&IntervalKey::new(2, 8)));
        assert_eq!(cache.lookup(&IntervalKey::new(0, 5)), Some(&15));
        assert_eq!(cache.lookup(&IntervalKey::new(10, 12)), Some(&5));
        assert_eq!(cache.stats().invalidations, 1);
    }

    #[test]
    fn test_invalidate_range_endpoint_overlap() {
        let mut cache = BoundedCache::new(10).unwrap();

        cache.store(IntervalKey::new(0, 4), 1i64);
        cache.store(IntervalKey::new(4, 9), 2i64);

        // Point 4 is an endpoint of both closed intervals.
        let removed = cache.invalidate_range(4);

        assert_eq!(removed, 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_invalidate_range_no_overlap_is_noop() {
        let mut cache = BoundedCache::new(10).unwrap();

        cache.store(IntervalKey::new(0, 3), 1i64);
        cache.store(IntervalKey::new(5, 7), 2i64);

        assert_eq!(cache.invalidate_range(4), 0);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_invalidate_range_preserves_recency_order() {
        let mut cache = BoundedCache::new(3).unwrap();

        cache.store(IntervalKey::new(0, 1), 1i64);
        cache.store(IntervalKey::new(5, 6), 2i64);
        cache.store(IntervalKey::new(8, 9), 3i64);

        // Drops the middle-recency entry; survivors keep their order.
        cache.invalidate_range(5);

        let order: Vec<IntervalKey> = cache.keys_by_recency().copied().collect();
        assert_eq!(order, vec![IntervalKey::new(8, 9), IntervalKey::new(0, 1)]);

        // Next eviction victim is still the oldest survivor.
        cache.store(IntervalKey::new(20, 21), 4i64);
        cache.store(IntervalKey::new(30, 31), 5i64);
        assert!(!cache.contains(&IntervalKey::new(0, 1)));
        assert!(cache.contains(&IntervalKey::new(8, 9)));
    }
}
