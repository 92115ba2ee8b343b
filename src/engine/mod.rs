//! Mutable BST engine
//!
//! Single owner of the live tree. All operations mutate in place and run
//! to completion; none of them can fail; rejection is an ordinary outcome.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::tree::{collect_values, Node, NodeId, NodeIdAllocator, Snapshot, TraversalOrder, Tree};

/// Result of [`Bst::insert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    /// Whether a node was attached
    pub inserted: bool,

    /// Identity of the new node (`None` when rejected)
    pub node_id: Option<NodeId>,
}

impl InsertOutcome {
    fn attached(id: NodeId) -> Self {
        Self {
            inserted: true,
            node_id: Some(id),
        }
    }

    fn rejected() -> Self {
        Self {
            inserted: false,
            node_id: None,
        }
    }
}

/// Binary search tree over `i64` with stable node identities
#[derive(Debug, Default)]
pub struct Bst {
    tree: Tree,
    ids: NodeIdAllocator,
}

impl Bst {
    /// Create empty engine
    pub fn new() -> Self {
        Self {
            tree: Tree::new(),
            ids: NodeIdAllocator::new(),
        }
    }

    /// Build an engine by inserting `values` in order (duplicates skipped).
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        let mut bst = Self::new();
        for value in values {
            bst.insert(value);
        }
        bst
    }

    /// Root node, if any
    pub fn root(&self) -> Option<&Node> {
        self.tree.root()
    }

    /// Borrow the live tree
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Deep, identity-preserving copy of the current tree
    pub fn snapshot(&self) -> Snapshot {
        self.tree.snapshot()
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.root().map_or(0, Node::count)
    }

    /// True when the tree holds no nodes
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Height (0 for the empty tree)
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Smallest value
    pub fn min(&self) -> Option<i64> {
        self.root().map(|n| n.min_node().value())
    }

    /// Largest value
    pub fn max(&self) -> Option<i64> {
        self.root().map(|n| n.max_node().value())
    }

    /// Strict ordering holds for every node
    pub fn is_valid(&self) -> bool {
        self.root().map_or(true, |n| n.is_ordered_within(None, None))
    }

    /// Insert `value`
    ///
    /// Iterative descent: less → left, greater → right, equal → reject.
    /// A node identity is only allocated when the node is attached.
    pub fn insert(&mut self, value: i64) -> InsertOutcome {
        let mut slot = &mut self.tree.root;

        while let Some(node) = slot {
            match value.cmp(&node.value) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => {
                    debug!(value, node = %node.id, "insert rejected: duplicate value");
                    return InsertOutcome::rejected();
                }
            }
        }

        let id = self.ids.allocate();
        *slot = Some(Box::new(Node::new(id, value)));
        debug!(value, node = %id, "inserted node");
        InsertOutcome::attached(id)
    }

    /// Find the node holding `value`
    pub fn search(&self, value: i64) -> Option<&Node> {
        let mut current = self.root();

        while let Some(node) = current {
            match value.cmp(&node.value) {
                Ordering::Equal => return Some(node),
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
            }
        }

        None
    }

    /// True when `value` is present
    pub fn contains(&self, value: i64) -> bool {
        self.search(value).is_some()
    }

    /// Delete `value`, returning whether a node was removed
    ///
    /// Two-children case: the in-order successor's value overwrites the
    /// located node (whose identity survives) and the successor node is
    /// removed from the right subtree.
    pub fn delete(&mut self, value: i64) -> bool {
        let (root, deleted) = Self::delete_node(self.tree.root.take(), value);
        self.tree.root = root;
        if deleted {
            debug!(value, "deleted value");
        } else {
            trace!(value, "delete: value absent");
        }
        deleted
    }

    fn delete_node(node: Option<Box<Node>>, value: i64) -> (Option<Box<Node>>, bool) {
        let Some(mut node) = node else {
            return (None, false);
        };

        match value.cmp(&node.value) {
            Ordering::Less => {
                let (left, deleted) = Self::delete_node(node.left.take(), value);
                node.left = left;
                (Some(node), deleted)
            }
            Ordering::Greater => {
                let (right, deleted) = Self::delete_node(node.right.take(), value);
                node.right = right;
                (Some(node), deleted)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => (None, true),
                (Some(child), None) | (None, Some(child)) => (Some(child), true),
                (Some(left), Some(right)) => {
                    let successor = right.min_node().value;
                    trace!(node = %node.id, from = node.value, to = successor, "replace with successor");
                    node.value = successor;
                    node.left = Some(left);
                    let (right, _) = Self::delete_node(Some(right), successor);
                    node.right = right;
                    (Some(node), true)
                }
            },
        }
    }

    /// Discard every node and restart identity allocation
    pub fn clear(&mut self) {
        self.tree = Tree::new();
        self.ids.reset();
        debug!("cleared tree");
    }

    /// Values in the given discipline
    pub fn traverse(&self, order: TraversalOrder) -> Vec<i64> {
        collect_values(self.root(), order)
    }

    /// Values in ascending order
    pub fn inorder(&self) -> Vec<i64> {
        self.traverse(TraversalOrder::Inorder)
    }

    /// Values node-first
    pub fn preorder(&self) -> Vec<i64> {
        self.traverse(TraversalOrder::Preorder)
    }

    /// Values children-first
    pub fn postorder(&self) -> Vec<i64> {
        self.traverse(TraversalOrder::Postorder)
    }
}
