//! Splay Tree Module
//!
//! Provides a self-adjusting binary search tree: every search or insert
//! restructures the tree via rotations so recently touched keys stay near
//! the root. Amortized O(log n) per operation.

mod node;
mod splay;


// Re-export public types
pub use node::{Node, Side};
pub use splay::{Iter, SplayTree};
