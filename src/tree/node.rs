//! Tree Node Module
//!
//! Defines the node structure for the splay tree. Each child slot holds an
//! exclusive owning pointer, so the tree is acyclic by construction and no
//! reference counting is needed.

// == Side ==
/// Names a child slot so rotation code can be written once for both
/// directions instead of as mirrored left/right copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the mirror slot.
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

// == Tree Node ==
/// A single key-value node with exclusively owned children.
#[derive(Debug)]
pub struct Node<K, V> {
    /// Search key (totally ordered)
    pub key: K,
    /// Stored value
    pub value: V,
    /// Left child: all keys strictly less than `key`
    pub left: Option<Box<Node<K, V>>>,
    /// Right child: all keys strictly greater than `key`
    pub right: Option<Box<Node<K, V>>>,
}

impl<K, V> Node<K, V> {
    // == Constructor ==
    /// Creates a leaf node.
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    // == Child Slot Access ==
    /// Detaches and returns the child on `side`.
    pub fn take_child(&mut self, side: Side) -> Option<Box<Node<K, V>>> {
        match side {
            Side::Left => self.left.take(),
            Side::Right => self.right.take(),
        }
    }

    /// Replaces the child on `side`.
    pub fn set_child(&mut self, side: Side, child: Option<Box<Node<K, V>>>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    /// Borrows the child on `side`.
    pub fn child(&self, side: Side) -> Option<&Node<K, V>> {
        match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }

    #[test]
    fn test_node_new_is_leaf() {
        let node: Node<i32, &str> = Node::new(7, "seven");
        assert_eq!(node.key, 7);
        assert_eq!(node.value, "seven");
        assert!(node.left.is_none());
        assert!(node.right.is_none());
    }

    #[test]
    fn test_take_and_set_child() {
        let mut node = Node::new(5, ());
        node.set_child(Side::Left, Some(Box::new(Node::new(3, ()))));

        assert_eq!(node.child(Side::Left).map(|n| n.key), Some(3));
        assert!(node.child(Side::Right).is_none());

        let taken = node.take_child(Side::Left);
        assert_eq!(taken.map(|n| n.key), Some(3));
        assert!(node.left.is_none());
    }
}
