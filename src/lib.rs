//! # Binary search tree decision traces
//!
//! A mutable BST paired with generators that narrate, step by step, the
//! decisions an operation makes: which nodes are visited, which way each
//! comparison goes, and where the tree changes shape.
//!
//! ## Core Discipline
//!
//! 1. **Snapshot before**: deep copy of the tree, identities preserved
//! 2. **Mutate**: the engine changes the live tree in place
//! 3. **Snapshot after**: the state a renderer shows once the change lands
//! 4. **Narrate**: a generator re-walks the *before* snapshot, never the
//!    live engine
//!
//! ## Usage Example
//!
//! ```
//! use bst_trace::{StepKind, Visualizer};
//!
//! let mut viz = Visualizer::new();
//! for value in [5, 3, 8] {
//!     viz.insert(value);
//! }
//!
//! let run = viz.search(3);
//! let kinds: Vec<StepKind> = run.trace.kinds();
//! assert_eq!(
//!     kinds,
//!     vec![StepKind::Visit, StepKind::Compare, StepKind::Visit, StepKind::Found]
//! );
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod engine;    // Mutable BST
pub mod operation; // Operation descriptors and parsing
pub mod playback;  // Cursor over a loaded trace
pub mod trace;     // Step records and trace generators
pub mod tree;      // Node model, identities, snapshots

// Re-exports for convenience
pub use engine::{Bst, InsertOutcome};
pub use operation::{Operation, ParseOperationError};
pub use playback::{ConfigError, Playback, PlaybackConfig, PlaybackStatus, Run};
pub use trace::{
    delete_trace, insert_trace, search_trace, traversal_trace, EdgeFocus, Step, StepFactory,
    StepId, StepKind, Trace,
};
pub use tree::{Node, NodeId, Snapshot, TraversalOrder};

use tracing::debug;

/// Session orchestrator
///
/// Owns the engine, the step numbering and playback. Every operation
/// snapshots the tree, mutates the engine, snapshots again and narrates
/// from the *before* snapshot.
#[derive(Debug)]
pub struct Visualizer {
    engine: Bst,
    steps: StepFactory,
    playback: Playback,
}

impl Visualizer {
    /// Session with default playback configuration
    pub fn new() -> Self {
        Self::with_config(PlaybackConfig::default())
    }

    /// Session with an explicit playback configuration
    pub fn with_config(config: PlaybackConfig) -> Self {
        Self {
            engine: Bst::new(),
            steps: StepFactory::new(),
            playback: Playback::new(config),
        }
    }

    /// Live engine (read-only)
    pub fn engine(&self) -> &Bst {
        &self.engine
    }

    /// Playback state
    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    /// Playback controls
    pub fn playback_mut(&mut self) -> &mut Playback {
        &mut self.playback
    }

    /// Execute `operation`; `None` for [`Operation::Clear`], which has no trace.
    pub fn apply(&mut self, operation: Operation) -> Option<&Run> {
        match operation {
            Operation::Insert(value) => Some(self.insert(value)),
            Operation::Search(value) => Some(self.search(value)),
            Operation::Delete(value) => Some(self.remove(value)),
            Operation::Traverse(order) => Some(self.traverse(order)),
            Operation::Clear => {
                self.clear();
                None
            }
        }
    }

    /// Insert `value` and narrate the descent.
    pub fn insert(&mut self, value: i64) -> &Run {
        let before = self.engine.snapshot();
        let outcome = self.engine.insert(value);
        let after = self.engine.snapshot();
        let trace = insert_trace(&before, value, outcome.node_id, &mut self.steps);
        self.finish(Operation::Insert(value), before, after, trace)
    }

    /// Search for `value` and narrate the descent.
    pub fn search(&mut self, value: i64) -> &Run {
        let before = self.engine.snapshot();
        let hit = self.engine.search(value).map(Node::id);
        debug!(value, hit = ?hit, "search");
        let after = self.engine.snapshot();
        let trace = search_trace(&before, value, &mut self.steps);
        self.finish(Operation::Search(value), before, after, trace)
    }

    /// Delete `value` and narrate the descent.
    pub fn remove(&mut self, value: i64) -> &Run {
        let before = self.engine.snapshot();
        self.engine.delete(value);
        let after = self.engine.snapshot();
        let trace = delete_trace(&before, value, &mut self.steps);
        self.finish(Operation::Delete(value), before, after, trace)
    }

    /// Narrate a depth-first traversal.
    pub fn traverse(&mut self, order: TraversalOrder) -> &Run {
        let before = self.engine.snapshot();
        let after = before.clone();
        let trace = traversal_trace(&before, order, &mut self.steps);
        self.finish(Operation::Traverse(order), before, after, trace)
    }

    /// Inorder traversal trace
    pub fn inorder(&mut self) -> &Run {
        self.traverse(TraversalOrder::Inorder)
    }

    /// Preorder traversal trace
    pub fn preorder(&mut self) -> &Run {
        self.traverse(TraversalOrder::Preorder)
    }

    /// Postorder traversal trace
    pub fn postorder(&mut self) -> &Run {
        self.traverse(TraversalOrder::Postorder)
    }

    /// Discard the tree, restart node and step identities, go idle.
    pub fn clear(&mut self) {
        self.engine.clear();
        self.steps.reset();
        self.playback.unload();
    }

    fn finish(&mut self, operation: Operation, before: Snapshot, after: Snapshot, trace: Trace) -> &Run {
        debug!(%operation, steps = trace.len(), "generated trace");
        self.playback.load(Run {
            operation,
            before,
            after,
            trace,
        })
    }
}
