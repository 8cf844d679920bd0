//! Interval Key Module
//!
//! Composite cache key representing a closed integer interval `[low, high]`.
//! Used by range-sum memoization: a cached sum for `[low, high]` must be
//! dropped whenever any index inside that interval is mutated.

use serde::Serialize;

// == Interval Key ==
/// Closed interval `[low, high]` usable as a hash-map key.
///
/// Equality and hashing are derived field-wise, so `(0, 5)` and `(5, 0)` are
/// distinct keys; callers are expected to construct `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IntervalKey {
    /// Inclusive lower endpoint
    pub low: i64,
    /// Inclusive upper endpoint
    pub high: i64,
}

impl IntervalKey {
    // == Constructor ==
    pub fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    // == Covers ==
    /// Returns true when `point` lies inside the closed interval.
    pub fn covers(&self, point: i64) -> bool {
        self.low <= point && point <= self.high
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_interior_and_endpoints() {
        let key = IntervalKey::new(2, 8);
        assert!(key.covers(2));
        assert!(key.covers(5));
        assert!(key.covers(8));
    }

    #[test]
    fn test_covers_outside() {
        let key = IntervalKey::new(2, 8);
        assert!(!key.covers(1));
        assert!(!key.covers(9));
        assert!(!key.covers(-3));
    }

    #[test]
    fn test_single_point_interval() {
        let key = IntervalKey::new(4, 4);
        assert!(key.covers(4));
        assert!(!key.covers(3));
        assert!(!key.covers(5));
    }

    #[test]
    fn test_equality_is_positional() {
        assert_eq!(IntervalKey::new(1, 3), IntervalKey::new(1, 3));
        assert_ne!(IntervalKey::new(1, 3), IntervalKey::new(3, 1));
    }
}
