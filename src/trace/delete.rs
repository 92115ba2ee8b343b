//! Deletion narration

use super::{descend, Descent, EdgeFocus, StepDraft, StepFactory, StepKind, Trace, HOLD_MS};
use crate::tree::Snapshot;

/// Trace deleting `value` from `snapshot`.
///
/// Search-shaped walk, then `delete` (structural) on the located node.
/// A node with two children adds one `replace` step naming its in-order
/// successor and focusing the edge into the right subtree. The walk stops
/// there: one structural event per call.
pub fn delete_trace(snapshot: &Snapshot, value: i64, factory: &mut StepFactory) -> Trace {
    let mut steps = Vec::new();

    match descend(snapshot.root(), value, factory, &mut steps) {
        Descent::Hit(node) => {
            steps.push(factory.make(
                StepDraft::new(StepKind::Delete, format!("Delete node {}", node.value()))
                    .focus([node.id()])
                    .structural(),
            ));

            if let (Some(_), Some(right)) = (node.left(), node.right()) {
                let successor = right.min_node();
                steps.push(factory.make(
                    StepDraft::new(
                        StepKind::Replace,
                        format!(
                            "Replace {} with successor {}",
                            node.value(),
                            successor.value()
                        ),
                    )
                    .focus([node.id(), successor.id()])
                    .edge(Some(EdgeFocus::new(node.id(), right.id())))
                    .structural()
                    .hold_ms(HOLD_MS),
                ));
            }
        }
        Descent::Miss { .. } | Descent::Empty => {
            steps.push(factory.make(StepDraft::new(
                StepKind::NotFound,
                format!("{} is not in the tree", value),
            )));
        }
    }

    Trace::from_steps(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Bst;
    use crate::tree::NodeId;

    #[test]
    fn test_delete_two_children_adds_replace() {
        let snapshot = Bst::from_values([5, 3, 8, 7, 9]).snapshot();
        let mut factory = StepFactory::new();

        let trace = delete_trace(&snapshot, 5, &mut factory);

        assert_eq!(
            trace.kinds(),
            vec![StepKind::Visit, StepKind::Delete, StepKind::Replace]
        );
        let replace = trace.last().expect("non-empty");
        assert_eq!(replace.message(), "Replace 5 with successor 7");
        // 5 = node-1, 8 = node-3, 7 = node-4
        assert_eq!(replace.focus_node_ids(), &[NodeId::new(1), NodeId::new(4)]);
        assert_eq!(
            replace.active_edge(),
            Some(EdgeFocus::new(NodeId::new(1), NodeId::new(3)))
        );
        assert!(replace.is_structural());
        assert_eq!(replace.hold_ms(), Some(HOLD_MS));
        assert_eq!(trace.first_structural(), Some(1));
    }

    #[test]
    fn test_delete_leaf_has_single_structural_step() {
        let snapshot = Bst::from_values([5, 3, 8]).snapshot();
        let mut factory = StepFactory::new();

        let trace = delete_trace(&snapshot, 8, &mut factory);

        let messages: Vec<&str> = trace.iter().map(|s| s.message()).collect();
        assert_eq!(
            messages,
            vec!["Visit 5", "8 > 5, move right", "Visit 8", "Delete node 8"]
        );
        let delete = trace.last().expect("non-empty");
        assert!(delete.is_structural());
        assert!(delete.hold_ms().is_none());
    }

    #[test]
    fn test_delete_missing_value() {
        let snapshot = Bst::from_values([5, 3]).snapshot();
        let mut factory = StepFactory::new();

        let trace = delete_trace(&snapshot, 4, &mut factory);

        let last = trace.last().expect("non-empty");
        assert_eq!(last.kind(), StepKind::NotFound);
        assert_eq!(last.message(), "4 is not in the tree");
        assert!(last.hold_ms().is_none());

        let empty = delete_trace(&Snapshot::empty(), 4, &mut factory);
        assert_eq!(empty.kinds(), vec![StepKind::NotFound]);
    }
}
