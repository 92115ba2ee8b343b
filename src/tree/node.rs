//! Tree node representation and identity allocation
//!
//! Node = (identity, value, left, right)
//! Children are exclusively owned: no sharing, no cycles.
//! Identities are handed out by a [`NodeIdAllocator`] and never reused
//! until the allocator is explicitly reset.

use std::fmt;

/// Stable node identity (`node-N`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[cfg_attr(feature = "visualize", serde(transparent))]
pub struct NodeId(u64);

impl NodeId {
    /// Wrap a raw identity number.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw identity number.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// Monotonic identity source for nodes
///
/// First identity issued is `node-1`.
#[derive(Debug, Clone, Default)]
pub struct NodeIdAllocator {
    issued: u64,
}

impl NodeIdAllocator {
    /// Fresh allocator at the baseline.
    pub fn new() -> Self {
        Self { issued: 0 }
    }

    /// Issue the next identity.
    pub fn allocate(&mut self) -> NodeId {
        self.issued += 1;
        NodeId(self.issued)
    }

    /// Restart at the baseline.
    ///
    /// Only sound when no node issued by this allocator is still alive.
    pub fn reset(&mut self) {
        self.issued = 0;
    }

    /// Number of identities issued since the last reset.
    pub fn issued(&self) -> u64 {
        self.issued
    }
}

/// BST node owning its children
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) value: i64,
    pub(crate) left: Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
}

impl Node {
    /// Create a childless node.
    pub fn new(id: NodeId, value: i64) -> Self {
        Self {
            id,
            value,
            left: None,
            right: None,
        }
    }

    /// Node identity
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Stored value
    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Left child, if any
    #[inline]
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// Right child, if any
    #[inline]
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Both children present
    #[inline]
    pub fn has_two_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// Minimum of this subtree (follow left links).
    pub fn min_node(&self) -> &Node {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    /// Maximum of this subtree (follow right links).
    pub fn max_node(&self) -> &Node {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        current
    }

    /// Number of nodes in this subtree.
    pub fn count(&self) -> usize {
        1 + self.left().map_or(0, Node::count) + self.right().map_or(0, Node::count)
    }

    /// Height of this subtree (a single node has height 1).
    pub fn height(&self) -> usize {
        1 + self
            .left()
            .map_or(0, Node::height)
            .max(self.right().map_or(0, Node::height))
    }

    /// Verify the strict ordering property for this subtree.
    ///
    /// Every value must lie in the open interval `(lower, upper)`.
    pub fn is_ordered_within(&self, lower: Option<i64>, upper: Option<i64>) -> bool {
        if lower.is_some_and(|lo| self.value <= lo) || upper.is_some_and(|hi| self.value >= hi) {
            return false;
        }
        self.left()
            .map_or(true, |l| l.is_ordered_within(lower, Some(self.value)))
            && self
                .right()
                .map_or(true, |r| r.is_ordered_within(Some(self.value), upper))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.value, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_is_monotonic() {
        let mut ids = NodeIdAllocator::new();
        let first = ids.allocate();
        let second = ids.allocate();

        assert_eq!(first.to_string(), "node-1");
        assert_eq!(second.to_string(), "node-2");
        assert!(first < second);
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn test_allocator_reset_restarts_baseline() {
        let mut ids = NodeIdAllocator::new();
        let first = ids.allocate();
        ids.allocate();
        ids.reset();

        assert_eq!(ids.allocate(), first);
    }

    #[test]
    fn test_min_max_and_height() {
        let mut ids = NodeIdAllocator::new();
        let mut root = Node::new(ids.allocate(), 5);
        let mut left = Node::new(ids.allocate(), 3);
        left.left = Some(Box::new(Node::new(ids.allocate(), 1)));
        root.left = Some(Box::new(left));
        root.right = Some(Box::new(Node::new(ids.allocate(), 8)));

        assert_eq!(root.min_node().value(), 1);
        assert_eq!(root.max_node().value(), 8);
        assert_eq!(root.height(), 3);
        assert_eq!(root.count(), 4);
        assert!(root.is_ordered_within(None, None));
        assert!(root.has_two_children());
        assert!(!root.is_leaf());
    }

    #[test]
    fn test_ordering_violation_detected() {
        let mut ids = NodeIdAllocator::new();
        let mut root = Node::new(ids.allocate(), 5);
        let mut left = Node::new(ids.allocate(), 3);
        // 6 sits in the left subtree of 5
        left.right = Some(Box::new(Node::new(ids.allocate(), 6)));
        root.left = Some(Box::new(left));

        assert!(!root.is_ordered_within(None, None));
    }
}
