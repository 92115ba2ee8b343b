//! Search narration

use super::{descend, Descent, StepDraft, StepFactory, StepKind, Trace, HOLD_MS};
use crate::tree::Snapshot;

/// Trace a search for `value` over `snapshot`.
///
/// `visit` + `compare` per node on the path, closed by `found` on a hit or
/// a single `not-found` (no focus) once the walk falls off the tree.
pub fn search_trace(snapshot: &Snapshot, value: i64, factory: &mut StepFactory) -> Trace {
    let mut steps = Vec::new();

    let closing = match descend(snapshot.root(), value, factory, &mut steps) {
        Descent::Hit(node) => StepDraft::new(StepKind::Found, format!("Found {}", value))
            .focus([node.id()])
            .hold_ms(HOLD_MS),
        Descent::Miss { .. } | Descent::Empty => {
            StepDraft::new(StepKind::NotFound, format!("{} is not in the tree", value))
                .hold_ms(HOLD_MS)
        }
    };
    steps.push(factory.make(closing));

    Trace::from_steps(steps)
}
