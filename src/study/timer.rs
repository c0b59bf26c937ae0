//! The session timer state machine.
//!
//! Tracks one study session at a time: start, pause, resume, end. Accrued
//! time lives only in memory and is gone if the process exits before the
//! session ends - the log only ever sees finalized sessions.

use chrono::{DateTime, Duration, Utc};

/// Timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// No session time accrued or accruing.
    Idle,
    /// Actively accruing time.
    Running,
    /// Holding accrued time without accruing more.
    Paused,
}

impl std::fmt::Display for TimerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
        }
    }
}

/// A start/pause/end session timer.
///
/// All methods take `now` explicitly so the machine is deterministic under
/// test. Invariant: `started_at` is `Some` exactly while `Running`.
#[derive(Debug, Clone)]
pub struct SessionTimer {
    state: TimerState,
    /// Instant the current running interval began.
    started_at: Option<DateTime<Utc>>,
    /// Time folded in from completed running intervals of this session.
    accumulated: Duration,
}

impl SessionTimer {
    /// A fresh idle timer with nothing accrued.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
            started_at: None,
            accumulated: Duration::zero(),
        }
    }

    /// Start the timer, or pause it if it is running.
    ///
    /// Pausing folds the just-finished running interval into the
    /// accumulated total. Returns the state after the toggle (always
    /// `Running` or `Paused`).
    pub fn toggle(&mut self, now: DateTime<Utc>) -> TimerState {
        match self.state {
            TimerState::Running => {
                if let Some(started) = self.started_at.take() {
                    self.accumulated = self.accumulated + now.signed_duration_since(started);
                }
                self.state = TimerState::Paused;
            }
            TimerState::Idle | TimerState::Paused => {
                self.started_at = Some(now);
                self.state = TimerState::Running;
            }
        }
        self.state
    }

    /// Time accrued so far, including the current running interval.
    #[must_use]
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        let running = self
            .started_at
            .map_or_else(Duration::zero, |started| now.signed_duration_since(started));
        self.accumulated + running
    }

    /// End the session: fold in any running interval, return the total,
    /// and reset to idle with nothing accrued.
    ///
    /// Finalizing an idle timer returns zero - a valid "ended with nothing
    /// recorded" outcome, not an error.
    pub fn finalize(&mut self, now: DateTime<Utc>) -> Duration {
        if let Some(started) = self.started_at.take() {
            self.accumulated = self.accumulated + now.signed_duration_since(started);
        }
        let total = self.accumulated;
        self.accumulated = Duration::zero();
        self.state = TimerState::Idle;
        total
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Whether the timer is actively accruing time.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new()
    }
}
