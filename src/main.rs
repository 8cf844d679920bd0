//! Memocache demo binary
//!
//! Runs the two memoization backends through their sample workloads:
//! Fibonacci against the splay tree and the bounded cache, then range sums
//! over a mutable array with invalidation on point updates.

mod cache;
mod config;
mod error;
mod memo;
mod tree;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cache::BoundedCache;
use config::Config;
use memo::{fib_cached, fib_splay, RangeSumMemo};
use tree::SplayTree;

fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "memocache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_capacity={}, fib_n={}, array_len={}",
        config.cache_capacity, config.fib_n, config.array_len
    );
    anyhow::ensure!(
        config.fib_n <= memo::MAX_FIB_N,
        "FIB_N={} overflows u64 (maximum is {})",
        config.fib_n,
        memo::MAX_FIB_N
    );
    anyhow::ensure!(config.array_len >= 1, "ARRAY_LEN must be at least 1");

    // Fibonacci memoized in the splay tree
    let mut tree = SplayTree::new();
    let via_tree = fib_splay(config.fib_n, &mut tree);
    info!(
        "fib({}) = {} via splay tree ({} nodes, root key {:?})",
        config.fib_n,
        via_tree,
        tree.len(),
        tree.root_key()
    );

    // Fibonacci memoized in the bounded cache
    let mut fib_cache =
        BoundedCache::new(config.cache_capacity).context("creating fibonacci cache")?;
    let via_cache = fib_cached(config.fib_n, &mut fib_cache);
    info!("fib({}) = {} via bounded cache", config.fib_n, via_cache);
    anyhow::ensure!(via_tree == via_cache, "backends disagree on fib value");

    // Range sums over a mutable array, with invalidation on updates
    let values: Vec<i64> = (0..config.array_len as i64).collect();
    let mut sums = RangeSumMemo::new(values, config.cache_capacity)
        .context("creating range-sum cache")?;
    let last = config.array_len - 1;

    let full = sums.range_sum(0, last)?;
    info!("sum[0..={}] = {}", last, full);

    let mid = last / 2;
    sums.update(mid, 0).context("point update")?;
    let after_update = sums.range_sum(0, last)?;
    info!(
        "after zeroing index {}: sum[0..={}] = {}",
        mid, last, after_update
    );

    let stats = serde_json::to_string(&sums.cache_stats())?;
    info!("range-sum cache stats: {}", stats);

    Ok(())
}
