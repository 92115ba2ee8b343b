//! Traversal narration

use super::{StepDraft, StepFactory, StepKind, Trace};
use crate::tree::{walk, Node, Snapshot, TraversalOrder};

/// Trace a depth-first traversal: one `traversal` step per node.
///
/// The empty tree yields a single `not-found` step.
pub fn traversal_trace(snapshot: &Snapshot, order: TraversalOrder, factory: &mut StepFactory) -> Trace {
    let mut steps = Vec::new();

    walk(snapshot.root(), order, &mut |node: &Node| {
        steps.push(factory.make(
            StepDraft::new(StepKind::Traversal, format!("Visit {}", node.value())).focus([node.id()]),
        ));
    });

    if steps.is_empty() {
        steps.push(factory.make(StepDraft::new(StepKind::NotFound, "Tree is empty")));
    }

    Trace::from_steps(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Bst;

    #[test]
    fn test_traversal_trace_follows_order() {
        let snapshot = Bst::from_values([5, 3, 8, 1, 4, 7, 9]).snapshot();
        let mut factory = StepFactory::new();

        for order in TraversalOrder::ALL {
            let trace = traversal_trace(&snapshot, order, &mut factory);
            let expected: Vec<String> = snapshot
                .values(order)
                .into_iter()
                .map(|v| format!("Visit {}", v))
                .collect();
            let actual: Vec<&str> = trace.iter().map(|s| s.message()).collect();

            assert_eq!(actual, expected);
            assert!(trace.iter().all(|s| s.kind() == StepKind::Traversal));
            assert!(trace.iter().all(|s| s.active_edge().is_none()));
        }
    }

    #[test]
    fn test_traversal_of_empty_tree() {
        let mut factory = StepFactory::new();
        let trace = traversal_trace(&Snapshot::empty(), TraversalOrder::Postorder, &mut factory);

        assert_eq!(trace.kinds(), vec![StepKind::NotFound]);
        assert_eq!(trace.steps()[0].message(), "Tree is empty");
    }
}
