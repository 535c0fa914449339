//! Cadence control for animated searches.
//!
//! [`AnimationDriver`] is clock-agnostic: the caller polls it with
//! the current [`Instant`] (from a Slint timer, a game loop, or a test) and the
//! driver decides whether enough time has passed to advance the stepper by one
//! node.

use crate::error::SearchError;
use crate::paint::PaintSink;
use crate::path::Path;
use crate::search::{BfsStepper, StepOutcome};
use std::time::{Duration, Instant};
use tracing::debug;

/// Default delay between two search steps.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(30);

/// How an animated search ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Found(Path),
    Exhausted,
    Cancelled,
}

/// Result of one [`AnimationDriver::poll`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverPoll {
    /// Not armed, or already finished
    Inactive,
    /// Armed, but the step interval has not elapsed yet
    Waiting,
    /// One step was taken and the search continues
    Stepped,
    /// The search reached a terminal state during this poll
    Finished(Completion),
    /// Stepping failed; the driver is disarmed
    Failed(SearchError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DriverState {
    Idle,
    Armed { last_step: Option<Instant> },
    Done,
}

/// Calls [`BfsStepper::step`] at most once per `interval`.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    interval: Duration,
    state: DriverState,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_INTERVAL)
    }
}

impl AnimationDriver {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: DriverState::Idle,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Whether the driver will step the search on a future poll.
    pub fn is_active(&self) -> bool {
        matches!(self.state, DriverState::Armed { .. })
    }

    /// Arm the driver. The first poll steps immediately.
    pub fn begin(&mut self) {
        self.state = DriverState::Armed { last_step: None };
    }

    /// Disarm the driver; it never steps again until re-armed.
    ///
    /// Returns `true` if a running animation was cancelled.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.is_active();
        self.state = DriverState::Done;
        if was_active {
            debug!("animation cancelled");
        }
        was_active
    }

    /// Reset to the idle state.
    pub fn reset(&mut self) {
        self.state = DriverState::Idle;
    }

    /// Advance the search by one step if the interval has elapsed.
    pub fn poll(
        &mut self,
        now: Instant,
        stepper: &mut BfsStepper,
        sink: &mut dyn PaintSink,
    ) -> DriverPoll {
        let DriverState::Armed { last_step } = self.state else {
            return DriverPoll::Inactive;
        };
        if let Some(last) = last_step {
            if now.saturating_duration_since(last) < self.interval {
                return DriverPoll::Waiting;
            }
        }
        if !stepper.is_running() {
            self.state = DriverState::Done;
            return DriverPoll::Finished(Completion::Cancelled);
        }

        match stepper.step(sink) {
            Ok(StepOutcome::Continue) => {
                self.state = DriverState::Armed {
                    last_step: Some(now),
                };
                DriverPoll::Stepped
            }
            Ok(StepOutcome::Found(path)) => {
                self.state = DriverState::Done;
                DriverPoll::Finished(Completion::Found(path))
            }
            Ok(StepOutcome::Exhausted) => {
                self.state = DriverState::Done;
                DriverPoll::Finished(Completion::Exhausted)
            }
            Err(err) => {
                self.state = DriverState::Done;
                DriverPoll::Failed(err)
            }
        }
    }

    /// Run the search to its end without pacing.
    ///
    /// Useful for headless use and tests. The step count is bounded by the
    /// number of cells, so this always terminates.
    pub fn run_to_completion(
        stepper: &mut BfsStepper,
        sink: &mut dyn PaintSink,
    ) -> Result<Completion, SearchError> {
        loop {
            if !stepper.is_running() {
                return Ok(Completion::Cancelled);
            }
            match stepper.step(sink)? {
                StepOutcome::Continue => {}
                StepOutcome::Found(path) => return Ok(Completion::Found(path)),
                StepOutcome::Exhausted => return Ok(Completion::Exhausted),
            }
        }
    }
}
