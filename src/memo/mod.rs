//! Memoization Drivers Module
//!
//! Sample workloads that exercise the two backends as opaque key-value
//! stores: a memoized Fibonacci computation and a range-sum engine over a
//! mutable array with cache invalidation on point updates.

mod fib;
mod range_sum;

// Re-export public API
pub use fib::{fib_cached, fib_splay, MAX_FIB_N};
pub use range_sum::RangeSumMemo;
