//! Configuration Module
//!
//! Handles loading demo-binary configuration from environment variables.

use std::env;

/// Demo run parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Capacity of the bounded caches used by the demo
    pub cache_capacity: usize,
    /// Fibonacci argument for the memoization demo
    pub fib_n: u64,
    /// Length of the backing array in the range-sum demo
    pub array_len: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Bounded cache capacity (default: 1000)
    /// - `FIB_N` - Fibonacci argument, at most 93 (default: 40)
    /// - `ARRAY_LEN` - Range-sum array length (default: 1000)
    pub fn from_env() -> Self {
        Self {
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            fib_n: env::var("FIB_N")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(40),
            array_len: env::var("ARRAY_LEN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: 1000,
            fib_n: 40,
            array_len: 1000,
        }
    }
}
