//! Insertion narration

use super::{descend, Descent, StepDraft, StepFactory, StepKind, Trace, HOLD_MS};
use crate::tree::{NodeId, Snapshot};

/// Trace inserting `value` into `snapshot`.
///
/// `inserted` is the identity the engine assigned, or `None` when it created
/// no node. At the attachment slot the caller's report wins over the walk:
/// a missing identity closes the trace with `not-found` instead of `insert`.
pub fn insert_trace(
    snapshot: &Snapshot,
    value: i64,
    inserted: Option<NodeId>,
    factory: &mut StepFactory,
) -> Trace {
    let mut steps = Vec::new();

    let closing = match descend(snapshot.root(), value, factory, &mut steps) {
        Descent::Empty => match inserted {
            Some(id) => StepDraft::new(StepKind::Insert, format!("Insert {} as root", value))
                .focus([id])
                .structural()
                .hold_ms(HOLD_MS),
            None => StepDraft::new(StepKind::NotFound, format!("Could not insert {}", value)),
        },
        Descent::Hit(node) => {
            StepDraft::new(StepKind::NotFound, format!("{} already exists", value))
                .focus([node.id()])
        }
        Descent::Miss { parent, direction } => match inserted {
            Some(id) => StepDraft::new(
                StepKind::Insert,
                format!(
                    "Insert {} as {} child of {}",
                    value,
                    direction.as_str(),
                    parent.value()
                ),
            )
            .focus([parent.id(), id])
            .structural()
            .hold_ms(HOLD_MS),
            None => StepDraft::new(StepKind::NotFound, format!("{} already exists", value)),
        },
    };
    steps.push(factory.make(closing));

    Trace::from_steps(steps)
}
