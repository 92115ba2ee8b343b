//! Binary search tree model
//!
//! Explicit representation: every node is boxed and owned by its parent.
//! [`Tree`] is the single owner of the root; [`Snapshot`] is a deep,
//! identity-preserving copy that can only be read.

mod node;
mod traversal;

pub use node::{Node, NodeId, NodeIdAllocator};
pub use traversal::{collect_values, walk, TraversalOrder};

use std::fmt::Write as _;

/// Owned tree (root + all reachable nodes)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    pub(crate) root: Option<Box<Node>>,
}

impl Tree {
    /// Create empty tree
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Root node, if any
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// True when the tree holds no nodes
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Deep copy sharing no nodes with `self`.
    ///
    /// Values, shape and node identities are preserved.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tree: self.clone(),
        }
    }
}

/// Read-only, alias-free copy of a tree at a point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Snapshot {
    #[cfg_attr(feature = "visualize", serde(rename = "root", serialize_with = "serialize_root"))]
    tree: Tree,
}

#[cfg(feature = "visualize")]
fn serialize_root<S>(tree: &Tree, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serde::Serialize::serialize(&tree.root, serializer)
}

impl Snapshot {
    /// Snapshot of the empty tree
    pub fn empty() -> Self {
        Self::default()
    }

    /// Root node, if any
    pub fn root(&self) -> Option<&Node> {
        self.tree.root()
    }

    /// True when the snapshot holds no nodes
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.root().map_or(0, Node::count)
    }

    /// Find a node by identity.
    pub fn find_id(&self, id: NodeId) -> Option<&Node> {
        let mut found = None;
        walk(self.root(), TraversalOrder::Preorder, &mut |n| {
            if found.is_none() && n.id() == id {
                found = Some(n);
            }
        });
        found
    }

    /// Values in discipline order
    pub fn values(&self, order: TraversalOrder) -> Vec<i64> {
        collect_values(self.root(), order)
    }

    /// Indented outline, one node per line, right subtree first.
    ///
    /// ```text
    ///     8 (node-3)
    /// 5 (node-1)
    ///     3 (node-2)
    /// ```
    pub fn render(&self) -> String {
        fn render_into(node: Option<&Node>, depth: usize, out: &mut String) {
            let Some(node) = node else {
                return;
            };
            render_into(node.right(), depth + 1, out);
            let _ = writeln!(out, "{}{} ({})", "    ".repeat(depth), node.value(), node.id());
            render_into(node.left(), depth + 1, out);
        }

        let mut out = String::new();
        render_into(self.root(), 0, &mut out);
        if out.is_empty() {
            out.push_str("(empty)\n");
        }
        out
    }
}

impl From<Tree> for Snapshot {
    fn from(tree: Tree) -> Self {
        Self { tree }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with_root(value: i64) -> (Tree, NodeId) {
        let mut ids = NodeIdAllocator::new();
        let id = ids.allocate();
        let tree = Tree {
            root: Some(Box::new(Node::new(id, value))),
        };
        (tree, id)
    }

    #[test]
    fn test_snapshot_is_independent() {
        let (mut tree, id) = tree_with_root(5);
        let snapshot = tree.snapshot();

        // Mutating the live tree must not leak into the snapshot
        if let Some(root) = tree.root.as_mut() {
            root.value = 42;
        }

        let root = snapshot.root().expect("snapshot keeps root");
        assert_eq!(root.value(), 5);
        assert_eq!(root.id(), id);
        assert_eq!(tree.root().map(Node::value), Some(42));
    }

    #[test]
    fn test_find_id_and_render() {
        let (tree, id) = tree_with_root(7);
        let snapshot = tree.snapshot();

        assert_eq!(snapshot.find_id(id).map(Node::value), Some(7));
        assert!(snapshot.find_id(NodeId::new(99)).is_none());
        assert_eq!(snapshot.render(), "7 (node-1)\n");
        assert_eq!(Snapshot::empty().render(), "(empty)\n");
        assert_eq!(snapshot.len(), 1);
    }
}
