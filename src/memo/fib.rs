//! Memoized Fibonacci
//!
//! Fibonacci numbers computed with overlapping-subproblem memoization, once
//! against the splay tree and once against the bounded cache. The callers own
//! the backend, so repeated calls reuse previously computed values.
//!
//! `u64` results overflow past n = 93; both functions debug-assert that
//! bound rather than silently wrapping.

use crate::cache::BoundedCache;
use crate::tree::SplayTree;

/// Largest n for which fib(n) fits in a u64.
pub const MAX_FIB_N: u64 = 93;

// == Splay-Backed Fibonacci ==
/// Computes fib(n), memoizing every subresult in the splay tree.
///
/// Each distinct n costs at most two tree searches and one insert, so a
/// strictly increasing warm-up pattern performs O(n) tree operations and
/// leaves exactly n + 1 nodes behind.
pub fn fib_splay(n: u64, tree: &mut SplayTree<u64, u64>) -> u64 {
    debug_assert!(n <= MAX_FIB_N, "fib({n}) overflows u64");

    if let Some(&cached) = tree.search(&n) {
        return cached;
    }
    if n < 2 {
        tree.insert(n, n);
        return n;
    }
    let result = fib_splay(n - 1, tree) + fib_splay(n - 2, tree);
    tree.insert(n, result);
    result
}

// == Cache-Backed Fibonacci ==
/// Computes fib(n), memoizing every subresult in the bounded cache.
///
/// With a capacity below n the cache thrashes and subresults are recomputed;
/// correctness is unaffected, only cost.
pub fn fib_cached(n: u64, cache: &mut BoundedCache<u64, u64>) -> u64 {
    debug_assert!(n <= MAX_FIB_N, "fib({n}) overflows u64");

    if let Some(&cached) = cache.lookup(&n) {
        return cached;
    }
    if n < 2 {
        cache.store(n, n);
        return n;
    }
    let result = fib_cached(n - 1, cache) + fib_cached(n - 2, cache);
    cache.store(n, result);
    result
}
