//! Trace step records
//!
//! A step is immutable once made. Only [`StepFactory`](super::StepFactory)
//! creates steps, so identities stay monotonic within a session.

use std::fmt;

use crate::tree::NodeId;

/// Step identity (`step-N`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[cfg_attr(feature = "visualize", serde(transparent))]
pub struct StepId(pub(crate) u64);

impl StepId {
    /// Raw identity number.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step-{}", self.0)
    }
}

/// Decision point narrated by a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[cfg_attr(feature = "visualize", serde(rename_all = "kebab-case"))]
pub enum StepKind {
    /// Arrived at a node
    Visit,
    /// Compared the target against a node and chose a direction
    Compare,
    /// New node attached
    Insert,
    /// Search target located
    Found,
    /// Walk ended without the expected outcome
    NotFound,
    /// Located node removed
    Delete,
    /// Located node overwritten by its in-order successor
    Replace,
    /// Node reported by a traversal
    Traversal,
}

impl StepKind {
    /// Kebab-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Visit => "visit",
            StepKind::Compare => "compare",
            StepKind::Insert => "insert",
            StepKind::Found => "found",
            StepKind::NotFound => "not-found",
            StepKind::Delete => "delete",
            StepKind::Replace => "replace",
            StepKind::Traversal => "traversal",
        }
    }

    /// Kinds that may close a trace.
    ///
    /// `replace` always follows a `delete` in the same trace, so it closes
    /// the two-children case.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, StepKind::Visit | StepKind::Compare)
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Highlighted parent → child edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[cfg_attr(feature = "visualize", serde(rename_all = "camelCase"))]
pub struct EdgeFocus {
    /// Parent node
    pub from_id: NodeId,
    /// Child node
    pub to_id: NodeId,
}

impl EdgeFocus {
    /// Edge between `from` and `to`
    pub fn new(from_id: NodeId, to_id: NodeId) -> Self {
        Self { from_id, to_id }
    }
}

impl fmt::Display for EdgeFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from_id, self.to_id)
    }
}

/// Immutable trace record
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[cfg_attr(feature = "visualize", serde(rename_all = "camelCase"))]
pub struct Step {
    id: StepId,
    kind: StepKind,
    message: String,
    focus_node_ids: Vec<NodeId>,
    active_edge: Option<EdgeFocus>,
    structural: bool,
    #[cfg_attr(feature = "visualize", serde(skip_serializing_if = "Option::is_none"))]
    duration_ms: Option<u64>,
    #[cfg_attr(feature = "visualize", serde(skip_serializing_if = "Option::is_none"))]
    hold_ms: Option<u64>,
}

impl Step {
    pub(crate) fn from_draft(id: StepId, draft: StepDraft) -> Self {
        Self {
            id,
            kind: draft.kind,
            message: draft.message,
            focus_node_ids: draft.focus,
            active_edge: draft.edge,
            structural: draft.structural,
            duration_ms: draft.duration_ms,
            hold_ms: draft.hold_ms,
        }
    }

    /// Step identity
    pub fn id(&self) -> StepId {
        self.id
    }

    /// Step kind
    pub fn kind(&self) -> StepKind {
        self.kind
    }

    /// Narration
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Nodes to highlight, in order (0, 1 or 2 entries)
    pub fn focus_node_ids(&self) -> &[NodeId] {
        &self.focus_node_ids
    }

    /// Edge to highlight
    pub fn active_edge(&self) -> Option<EdgeFocus> {
        self.active_edge
    }

    /// Coincides with the tree changing shape
    pub fn is_structural(&self) -> bool {
        self.structural
    }

    /// Animation duration hint
    pub fn duration_ms(&self) -> Option<u64> {
        self.duration_ms
    }

    /// Playback delay override for this step only
    pub fn hold_ms(&self) -> Option<u64> {
        self.hold_ms
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.id, self.kind, self.message)?;
        if !self.focus_node_ids.is_empty() {
            let focus: Vec<String> = self.focus_node_ids.iter().map(ToString::to_string).collect();
            write!(f, "\tfocus={}", focus.join(","))?;
        }
        if let Some(edge) = self.active_edge {
            write!(f, "\tedge={}", edge)?;
        }
        if self.structural {
            f.write_str("\tstructural")?;
        }
        if let Some(hold) = self.hold_ms {
            write!(f, "\thold={}ms", hold)?;
        }
        Ok(())
    }
}

/// Unnumbered step under construction
///
/// Optional fields default to: no focus, no edge, not structural,
/// no timing hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDraft {
    kind: StepKind,
    message: String,
    focus: Vec<NodeId>,
    edge: Option<EdgeFocus>,
    structural: bool,
    duration_ms: Option<u64>,
    hold_ms: Option<u64>,
}

impl StepDraft {
    /// Start a draft
    pub fn new(kind: StepKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            focus: Vec::new(),
            edge: None,
            structural: false,
            duration_ms: None,
            hold_ms: None,
        }
    }

    /// Highlight these nodes
    pub fn focus(mut self, ids: impl IntoIterator<Item = NodeId>) -> Self {
        self.focus = ids.into_iter().collect();
        self
    }

    /// Highlight this edge (or none)
    pub fn edge(mut self, edge: Option<EdgeFocus>) -> Self {
        self.edge = edge;
        self
    }

    /// Mark as coinciding with a structural change
    pub fn structural(mut self) -> Self {
        self.structural = true;
        self
    }

    /// Animation duration hint
    pub fn duration_ms(mut self, ms: u64) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    /// Playback delay override
    pub fn hold_ms(mut self, ms: u64) -> Self {
        self.hold_ms = Some(ms);
        self
    }
}
