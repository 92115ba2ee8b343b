//! Depth-first traversal disciplines
//!
//! Recursion depth = tree height. No comparisons are made; the walk
//! simply reports nodes in discipline order.

use std::fmt;
use std::str::FromStr;

use super::Node;

/// Depth-first visit order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[cfg_attr(feature = "visualize", serde(rename_all = "lowercase"))]
pub enum TraversalOrder {
    /// Left subtree, node, right subtree
    Inorder,

    /// Node, left subtree, right subtree
    Preorder,

    /// Left subtree, right subtree, node
    Postorder,
}

impl TraversalOrder {
    /// All disciplines, in presentation order.
    pub const ALL: [TraversalOrder; 3] = [
        TraversalOrder::Inorder,
        TraversalOrder::Preorder,
        TraversalOrder::Postorder,
    ];

    /// Lowercase name (`inorder`, `preorder`, `postorder`).
    pub fn as_str(&self) -> &'static str {
        match self {
            TraversalOrder::Inorder => "inorder",
            TraversalOrder::Preorder => "preorder",
            TraversalOrder::Postorder => "postorder",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraversalOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inorder" | "in" => Ok(TraversalOrder::Inorder),
            "preorder" | "pre" => Ok(TraversalOrder::Preorder),
            "postorder" | "post" => Ok(TraversalOrder::Postorder),
            other => Err(format!("unknown traversal order '{}'", other)),
        }
    }
}

/// Walk the subtree rooted at `node`, calling `visit` in discipline order.
pub fn walk<'a, F>(node: Option<&'a Node>, order: TraversalOrder, visit: &mut F)
where
    F: FnMut(&'a Node),
{
    let Some(node) = node else {
        return;
    };

    match order {
        TraversalOrder::Inorder => {
            walk(node.left(), order, visit);
            visit(node);
            walk(node.right(), order, visit);
        }
        TraversalOrder::Preorder => {
            visit(node);
            walk(node.left(), order, visit);
            walk(node.right(), order, visit);
        }
        TraversalOrder::Postorder => {
            walk(node.left(), order, visit);
            walk(node.right(), order, visit);
            visit(node);
        }
    }
}

/// Collect values of the subtree in discipline order.
pub fn collect_values(node: Option<&Node>, order: TraversalOrder) -> Vec<i64> {
    let mut output = Vec::new();
    walk(node, order, &mut |n: &Node| output.push(n.value()));
    output
}
