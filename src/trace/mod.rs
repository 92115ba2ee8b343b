//! Decision traces
//!
//! Each generator re-walks a [`Snapshot`] with the engine's comparison
//! logic and emits one [`Step`] per decision point. Generators never touch
//! the live engine, so the same call narrates the same path whether it runs
//! before or after the real mutation.
//!
//! Every generator returns a non-empty trace whose last step is terminal.

mod delete;
mod factory;
mod insert;
mod search;
mod step;
mod traversal;

pub use delete::delete_trace;
pub use factory::StepFactory;
pub use insert::insert_trace;
pub use search::search_trace;
pub use step::{EdgeFocus, Step, StepDraft, StepId, StepKind};
pub use traversal::traversal_trace;

use std::fmt::Write as _;

use crate::tree::Node;

/// Hold applied to steps worth lingering on
pub const HOLD_MS: u64 = 350;

/// Ordered, immutable step sequence for one operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[cfg_attr(feature = "visualize", serde(transparent))]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub(crate) fn from_steps(steps: Vec<Step>) -> Self {
        debug_assert!(!steps.is_empty(), "generators always close the trace");
        Self { steps }
    }

    /// Steps in playback order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Step at `index`
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True for the placeholder trace of an idle playback
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Final step
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Iterate steps
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Kinds in playback order
    pub fn kinds(&self) -> Vec<StepKind> {
        self.steps.iter().map(Step::kind).collect()
    }

    /// Index of the first structural step
    pub fn first_structural(&self) -> Option<usize> {
        self.steps.iter().position(Step::is_structural)
    }

    /// One line per step, `Display` format of [`Step`]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for step in &self.steps {
            let _ = writeln!(out, "{}", step);
        }
        out
    }

    /// Content hash of the rendered trace
    pub fn fingerprint(&self) -> blake3::Hash {
        blake3::hash(self.render().as_bytes())
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Branch chosen at a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Direction toward `value` from `node`, `None` on equality.
    fn toward(value: i64, node: &Node) -> Option<Self> {
        match value.cmp(&node.value()) {
            std::cmp::Ordering::Less => Some(Direction::Left),
            std::cmp::Ordering::Greater => Some(Direction::Right),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn child(self, node: &Node) -> Option<&Node> {
        match self {
            Direction::Left => node.left(),
            Direction::Right => node.right(),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// `Visit v`
pub(crate) fn visit_draft(node: &Node) -> StepDraft {
    StepDraft::new(StepKind::Visit, format!("Visit {}", node.value())).focus([node.id()])
}

/// `x < v, move left` / `x > v, move right`, with the edge toward the
/// child when that child exists.
pub(crate) fn compare_draft(value: i64, node: &Node, direction: Direction) -> StepDraft {
    let symbol = match direction {
        Direction::Left => '<',
        Direction::Right => '>',
    };
    let edge = direction
        .child(node)
        .map(|child| EdgeFocus::new(node.id(), child.id()));

    StepDraft::new(
        StepKind::Compare,
        format!("{} {} {}, move {}", value, symbol, node.value(), direction.as_str()),
    )
    .focus([node.id()])
    .edge(edge)
}

/// Outcome of descending toward `value`
pub(crate) enum Descent<'a> {
    /// Walk stopped on a node holding `value`
    Hit(&'a Node),
    /// Walk fell off `parent` in `direction`
    Miss { parent: &'a Node, direction: Direction },
    /// Nothing to walk
    Empty,
}

/// Descend from `root` toward `value`, pushing `visit`/`compare` steps.
///
/// The hit node's `visit` step is pushed; the terminal step is left to the
/// caller.
pub(crate) fn descend<'a>(
    root: Option<&'a Node>,
    value: i64,
    factory: &mut StepFactory,
    steps: &mut Vec<Step>,
) -> Descent<'a> {
    let Some(mut current) = root else {
        return Descent::Empty;
    };

    loop {
        steps.push(factory.make(visit_draft(current)));

        let Some(direction) = Direction::toward(value, current) else {
            return Descent::Hit(current);
        };
        steps.push(factory.make(compare_draft(value, current, direction)));

        match direction.child(current) {
            Some(child) => current = child,
            None => {
                return Descent::Miss {
                    parent: current,
                    direction,
                }
            }
        }
    }
}
