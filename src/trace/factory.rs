//! Step identity allocation

use super::{Step, StepDraft, StepId};

/// Numbers steps for one session
///
/// First step made after construction or [`reset`](Self::reset) is `step-1`.
#[derive(Debug, Clone, Default)]
pub struct StepFactory {
    issued: u64,
}

impl StepFactory {
    /// Fresh factory at the baseline.
    pub fn new() -> Self {
        Self { issued: 0 }
    }

    /// Number `draft` and freeze it.
    pub fn make(&mut self, draft: StepDraft) -> Step {
        self.issued += 1;
        Step::from_draft(StepId(self.issued), draft)
    }

    /// Restart numbering. Paired with the node allocator reset on clear.
    pub fn reset(&mut self) {
        self.issued = 0;
    }

    /// Steps made since the last reset.
    pub fn issued(&self) -> u64 {
        self.issued
    }
}
