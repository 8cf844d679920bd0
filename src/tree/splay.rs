//! Splay Tree Engine
//!
//! Self-adjusting binary search tree. Every `search` or `insert` splays the
//! touched key to the root, so hot keys of a memoized workload sit near the
//! top of the tree.
//!
//! The splay pass is iterative: the search path is collected onto an explicit
//! stack of detached nodes and then reassembled bottom-up with zig / zig-zig /
//! zig-zag rotations. Recursing one level per step would risk stack overflow
//! on adversarial (fully skewed) key sequences, so no tree operation here uses
//! call-stack recursion.
//!
//! Not internally synchronized: every operation takes `&mut self`, so
//! concurrent callers must serialize access with an external lock per tree.

use std::cmp::Ordering;

use crate::tree::{Node, Side};

type Link<K, V> = Option<Box<Node<K, V>>>;

// == Splay Tree ==
/// Ordered key-value store that moves accessed keys toward the root.
///
/// Keys only require `Ord`; a total order is guaranteed by the trait bound,
/// so incomparable keys cannot occur. There is no delete operation.
#[derive(Debug)]
pub struct SplayTree<K, V> {
    /// Owns the entire tree
    root: Link<K, V>,
    /// Number of distinct keys currently stored
    len: usize,
}

impl<K, V> Default for SplayTree<K, V> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<K: Ord, V> SplayTree<K, V> {
    // == Constructor ==
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    // == Search ==
    /// Splays toward `key` and returns its value if present.
    ///
    /// The matched node, or the last node visited on the search path, becomes
    /// the new root. Absence is a normal outcome, not an error.
    pub fn search(&mut self, key: &K) -> Option<&V> {
        let root = self.root.take()?;
        let root = splay(root, key);
        let found = root.key == *key;
        let root = self.root.insert(root);
        if found {
            Some(&root.value)
        } else {
            None
        }
    }

    // == Insert ==
    /// Inserts or overwrites the value for `key`, leaving `key` at the root.
    ///
    /// Re-inserting an existing key rewrites its value in place with no
    /// structural change. Otherwise the splayed tree is split around the new
    /// key and the new node becomes the root.
    pub fn insert(&mut self, key: K, value: V) {
        let Some(root) = self.root.take() else {
            self.root = Some(Box::new(Node::new(key, value)));
            self.len = 1;
            return;
        };

        let mut root = splay(root, &key);
        match key.cmp(&root.key) {
            Ordering::Equal => {
                root.value = value;
                self.root = Some(root);
            }
            Ordering::Less => {
                // New root takes the splayed root's left subtree; the old
                // root (all keys greater than `key`) becomes the right child.
                let mut node = Box::new(Node::new(key, value));
                node.left = root.left.take();
                node.right = Some(root);
                self.root = Some(node);
                self.len += 1;
            }
            Ordering::Greater => {
                let mut node = Box::new(Node::new(key, value));
                node.right = root.right.take();
                node.left = Some(root);
                self.root = Some(node);
                self.len += 1;
            }
        }
    }

    // == Root Key ==
    /// Returns the key at the root, if any.
    ///
    /// After a successful `search(k)` or any `insert(k, _)`, this is `k`.
    pub fn root_key(&self) -> Option<&K> {
        self.root.as_deref().map(|n| &n.key)
    }

    // == Length ==
    /// Returns the number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    // == In-Order Iteration ==
    /// Iterates over `(key, value)` pairs in ascending key order.
    ///
    /// Iterative (explicit stack); does not restructure the tree.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

// == Drop ==
/// Iterative teardown. The default drop glue recurses per tree level, which
/// overflows the stack on deeply skewed trees; a worklist keeps teardown
/// depth constant.
impl<K, V> Drop for SplayTree<K, V> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<K, V>>> = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

// == Splay Pass ==
/// Restructures the subtree so the node matching `key`, or the last node on
/// the search path, becomes its root.
///
/// Phase 1 descends from the root, detaching each visited node from the child
/// it descends into and pushing it onto a path stack together with the side
/// taken. Phase 2 pops the stack and reattaches with standard splay steps:
/// zig-zig rotates the grandparent edge before the parent edge, zig-zag the
/// parent edge before the grandparent edge, and a lone parent gets a single
/// zig rotation.
fn splay<K: Ord, V>(root: Box<Node<K, V>>, key: &K) -> Box<Node<K, V>> {
    let mut path: Vec<(Box<Node<K, V>>, Side)> = Vec::new();
    let mut current = root;

    loop {
        let side = match key.cmp(&current.key) {
            Ordering::Equal => break,
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
        };
        match current.take_child(side) {
            Some(child) => {
                path.push((current, side));
                current = child;
            }
            // Key absent: the last node visited is splayed instead.
            None => break,
        }
    }

    while let Some((parent, parent_side)) = path.pop() {
        current = match path.pop() {
            Some((grand, grand_side)) if grand_side == parent_side => {
                // Zig-zig
                attach_rotate(attach_rotate(grand, grand_side, parent), parent_side, current)
            }
            Some((grand, grand_side)) => {
                // Zig-zag
                attach_rotate(grand, grand_side, attach_rotate(parent, parent_side, current))
            }
            // Zig
            None => attach_rotate(parent, parent_side, current),
        };
    }

    current
}

// == Rotation Primitive ==
/// Promotes `child` (detached from `parent`'s `side` slot) over `parent`.
///
/// `parent` adopts `child`'s opposite-side subtree into the vacated slot and
/// then hangs off `child`'s opposite side. With `side == Left` this is a
/// right rotation; with `side == Right`, a left rotation. Constant-time
/// pointer reassignment; keys and values are untouched, so the BST invariant
/// is preserved.
fn attach_rotate<K, V>(
    mut parent: Box<Node<K, V>>,
    side: Side,
    mut child: Box<Node<K, V>>,
) -> Box<Node<K, V>> {
    parent.set_child(side, child.take_child(side.opposite()));
    child.set_child(side.opposite(), Some(parent));
    child
}

// == In-Order Iterator ==
/// Borrowing in-order iterator over a splay tree.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((&node.key, &node.value))
    }
}
