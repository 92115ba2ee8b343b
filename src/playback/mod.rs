//! Playback controller
//!
//! Indexes into a loaded trace and decides which snapshot a renderer should
//! show. Timing is computed, never waited on: a driver asks
//! [`Playback::next_delay`], sleeps or schedules, then calls
//! [`Playback::advance`].

mod config;

pub use config::{ConfigError, PlaybackConfig, DEFAULT_SPEED_MS, MAX_SPEED_MS, MIN_SPEED_MS};

use std::time::Duration;

use tracing::trace;

use crate::operation::Operation;
use crate::trace::{EdgeFocus, Step, Trace};
use crate::tree::{NodeId, Snapshot};

/// One executed operation: the narrated trace plus both tree states
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Run {
    /// What was executed
    pub operation: Operation,
    /// Tree before the mutation (the trace narrates this one)
    pub before: Snapshot,
    /// Tree after the mutation
    pub after: Snapshot,
    /// Decision trace
    pub trace: Trace,
}

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// No trace loaded
    Idle,
    /// Timer-driven advancing
    Playing,
    /// Holding on the current step
    Paused,
    /// Holding on the last step
    Complete,
}

/// Cursor over the current run's trace
#[derive(Debug, Clone)]
pub struct Playback {
    run: Option<Run>,
    position: Option<usize>,
    status: PlaybackStatus,
    speed_ms: u64,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

impl Playback {
    /// Idle playback
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            run: None,
            position: None,
            status: PlaybackStatus::Idle,
            speed_ms: config.speed_ms,
        }
    }

    /// Replace the current run and start playing from the first step.
    pub fn load(&mut self, run: Run) -> &Run {
        if run.trace.is_empty() {
            self.position = None;
            self.status = PlaybackStatus::Idle;
        } else {
            self.position = Some(0);
            self.status = PlaybackStatus::Playing;
        }
        trace!(steps = run.trace.len(), status = ?self.status, "loaded run");
        self.run.insert(run)
    }

    /// Drop the current run.
    pub fn unload(&mut self) {
        self.run = None;
        self.position = None;
        self.status = PlaybackStatus::Idle;
    }

    /// Current run, if any
    pub fn run(&self) -> Option<&Run> {
        self.run.as_ref()
    }

    /// Current status
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Current index (`None` when no trace is active)
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Current index, `-1` when no trace is active
    pub fn position_index(&self) -> isize {
        self.position.map_or(-1, |p| p as isize)
    }

    /// Default delay between steps
    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    /// Change the default delay.
    pub fn set_speed_ms(&mut self, speed_ms: u64) -> Result<(), ConfigError> {
        config::validate_speed(speed_ms)?;
        self.speed_ms = speed_ms;
        Ok(())
    }

    fn len(&self) -> usize {
        self.run.as_ref().map_or(0, |r| r.trace.len())
    }

    fn last_index(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }

    /// Toggle play/pause; replays from the start once complete.
    pub fn play_pause(&mut self) {
        if self.len() == 0 {
            return;
        }
        match self.status {
            PlaybackStatus::Playing => self.status = PlaybackStatus::Paused,
            PlaybackStatus::Complete => {
                self.position = Some(0);
                self.status = PlaybackStatus::Playing;
            }
            PlaybackStatus::Idle | PlaybackStatus::Paused => self.status = PlaybackStatus::Playing,
        }
    }

    /// Pause and move one step forward.
    pub fn step_forward(&mut self) {
        let Some(last) = self.last_index() else {
            return;
        };
        let next = self.position.map_or(0, |p| p + 1).min(last);
        self.position = Some(next);
        self.status = if next == last {
            PlaybackStatus::Complete
        } else {
            PlaybackStatus::Paused
        };
    }

    /// Pause and move one step back.
    pub fn step_backward(&mut self) {
        let Some(last) = self.last_index() else {
            return;
        };
        let previous = self.position.map_or(0, |p| p.saturating_sub(1)).min(last);
        self.position = Some(previous);
        self.status = PlaybackStatus::Paused;
    }

    /// Rewind to the first step, paused.
    pub fn reset(&mut self) {
        if self.len() == 0 {
            return;
        }
        self.position = Some(0);
        self.status = PlaybackStatus::Paused;
    }

    /// Scrub to `index` (clamped).
    pub fn jump_to(&mut self, index: usize) {
        let Some(last) = self.last_index() else {
            return;
        };
        let target = index.min(last);
        self.position = Some(target);
        self.status = if target == last {
            PlaybackStatus::Complete
        } else {
            PlaybackStatus::Paused
        };
    }

    /// Delay before the timer should fire, while playing.
    ///
    /// The current step's hold overrides the default speed.
    pub fn next_delay(&self) -> Option<Duration> {
        if self.status != PlaybackStatus::Playing {
            return None;
        }
        let position = self.position?;
        let last = self.last_index()?;
        if position >= last {
            return None;
        }
        let step = self.active_step()?;
        Some(Duration::from_millis(step.hold_ms().unwrap_or(self.speed_ms)))
    }

    /// Timer fired: move to the next step, completing on the last one.
    pub fn advance(&mut self) {
        if self.status != PlaybackStatus::Playing {
            return;
        }
        let (Some(position), Some(last)) = (self.position, self.last_index()) else {
            return;
        };
        let next = position + 1;
        if next >= last {
            self.position = Some(last);
            self.status = PlaybackStatus::Complete;
        } else {
            self.position = Some(next);
        }
    }

    /// Step at the current position
    pub fn active_step(&self) -> Option<&Step> {
        let position = self.position?;
        self.run.as_ref()?.trace.get(position)
    }

    /// Nodes to highlight now
    pub fn active_focus(&self) -> &[NodeId] {
        self.active_step().map(Step::focus_node_ids).unwrap_or(&[])
    }

    /// Edge to highlight now
    pub fn active_edge(&self) -> Option<EdgeFocus> {
        self.active_step().and_then(Step::active_edge)
    }

    /// Narration for the current step (empty when idle)
    pub fn message(&self) -> &str {
        self.active_step().map_or("", Step::message)
    }

    /// Fraction of the trace shown so far, in `[0, 1]`
    pub fn progress(&self) -> f64 {
        match (self.position, self.len()) {
            (Some(position), len) if len > 0 => (position + 1) as f64 / len as f64,
            _ => 0.0,
        }
    }

    /// Tree a renderer should draw now.
    ///
    /// The *before* snapshot is shown while the position precedes the first
    /// structural step; the *after* snapshot otherwise.
    pub fn visible_snapshot(&self) -> Option<&Snapshot> {
        let run = self.run.as_ref()?;
        let show_before = match (run.trace.first_structural(), self.position) {
            (Some(structural), Some(position)) => position < structural,
            _ => false,
        };
        Some(if show_before { &run.before } else { &run.after })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Bst;
    use crate::trace::{insert_trace, search_trace, StepFactory, HOLD_MS};

    fn insert_run() -> Run {
        // [5, 3] then insert 4: visit, compare, visit, compare, insert
        let mut bst = Bst::from_values([5, 3]);
        let before = bst.snapshot();
        let outcome = bst.insert(4);
        let mut factory = StepFactory::new();
        let trace = insert_trace(&before, 4, outcome.node_id, &mut factory);
        Run {
            operation: Operation::Insert(4),
            before,
            after: bst.snapshot(),
            trace,
        }
    }

    #[test]
    fn test_load_starts_playing() {
        let mut playback = Playback::default();
        assert_eq!(playback.status(), PlaybackStatus::Idle);
        assert_eq!(playback.position_index(), -1);
        assert_eq!(playback.progress(), 0.0);

        playback.load(insert_run());
        assert_eq!(playback.status(), PlaybackStatus::Playing);
        assert_eq!(playback.position(), Some(0));
        assert_eq!(playback.message(), "Visit 5");
    }

    #[test]
    fn test_play_through_with_timer() {
        let mut playback = Playback::default();
        playback.load(insert_run());

        let mut delays = Vec::new();
        while let Some(delay) = playback.next_delay() {
            delays.push(delay);
            playback.advance();
        }

        assert_eq!(delays.len(), 4);
        assert!(delays.iter().all(|d| *d == Duration::from_millis(DEFAULT_SPEED_MS)));
        assert_eq!(playback.status(), PlaybackStatus::Complete);
        assert_eq!(playback.position(), Some(4));
        assert_eq!(playback.progress(), 1.0);
    }

    #[test]
    fn test_hold_overrides_speed() {
        let bst = Bst::from_values([5]);
        let before = bst.snapshot();
        let mut factory = StepFactory::new();
        let trace = search_trace(&before, 5, &mut factory);
        let mut playback = Playback::default();
        playback.load(Run {
            operation: Operation::Search(5),
            before: before.clone(),
            after: before,
            trace,
        });

        // visit 5 uses the default speed, found 5 is the last step
        assert_eq!(playback.next_delay(), Some(Duration::from_millis(DEFAULT_SPEED_MS)));
        playback.advance();
        assert_eq!(playback.active_step().and_then(Step::hold_ms), Some(HOLD_MS));
        assert_eq!(playback.next_delay(), None);
    }

    #[test]
    fn test_visible_snapshot_switches_at_structural_step() {
        let mut playback = Playback::default();
        let run = playback.load(insert_run()).clone();

        playback.jump_to(3);
        assert_eq!(playback.visible_snapshot(), Some(&run.before));
        assert_eq!(playback.status(), PlaybackStatus::Paused);

        playback.step_forward();
        assert_eq!(playback.visible_snapshot(), Some(&run.after));
        assert_eq!(playback.status(), PlaybackStatus::Complete);
        assert_eq!(playback.active_focus().len(), 2);
    }

    #[test]
    fn test_manual_navigation_clamps() {
        let mut playback = Playback::default();
        playback.load(insert_run());

        playback.step_backward();
        assert_eq!(playback.position(), Some(0));
        assert_eq!(playback.status(), PlaybackStatus::Paused);

        playback.jump_to(100);
        assert_eq!(playback.position(), Some(4));
        assert_eq!(playback.status(), PlaybackStatus::Complete);

        playback.play_pause();
        assert_eq!(playback.position(), Some(0));
        assert_eq!(playback.status(), PlaybackStatus::Playing);

        playback.play_pause();
        assert_eq!(playback.status(), PlaybackStatus::Paused);
        assert_eq!(playback.next_delay(), None);

        playback.reset();
        assert_eq!(playback.position(), Some(0));
        assert!(playback.active_edge().is_none());

        playback.step_forward();
        assert!(playback.active_edge().is_some());
    }

    #[test]
    fn test_controls_ignored_without_run() {
        let mut playback = Playback::default();
        playback.step_forward();
        playback.jump_to(3);
        playback.play_pause();
        playback.advance();

        assert_eq!(playback.status(), PlaybackStatus::Idle);
        assert!(playback.visible_snapshot().is_none());
        assert_eq!(playback.message(), "");
    }

    #[test]
    fn test_speed_validation() {
        let mut playback = Playback::default();
        assert!(playback.set_speed_ms(100).is_err());
        assert!(playback.set_speed_ms(400).is_ok());
        assert_eq!(playback.speed_ms(), 400);
    }
}
