//! Animation controller state machine.
//!
//! Two states, Playing and Paused, over an owned [`SimClock`]:
//! - `play` / `pause` move between them and never touch simulated time;
//! - `reset` returns to Paused at time zero from any state;
//! - `tick` advances time by one fixed step while Playing and is a no-op
//!   while Paused. `tick` never changes the play/pause state itself.
//!
//! The host (TUI binary or headless CLI run) owns the driving loop and
//! calls `tick` exactly once per redraw cycle. None of these operations
//! can fail; the only fallible path is constructing a controller with a
//! custom time step.

use serde::{Deserialize, Serialize};

use crate::clock::SimClock;
use crate::error::{TransitError, TransitResult};

/// Simulated days added per tick while playing.
pub const TIME_STEP_DAYS: f64 = 2.0;

/// Real-time wait between driving-loop cycles (milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

/// Owns the session clock and applies the play/pause/reset/tick protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationController {
    clock: SimClock,
    time_step_days: f64,
}

impl AnimationController {
    /// Create a controller at session start: paused, time zero, default
    /// time step of [`TIME_STEP_DAYS`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clock: SimClock::new(),
            time_step_days: TIME_STEP_DAYS,
        }
    }

    /// Create a controller with a custom time step.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the step is non-positive or
    /// non-finite.
    pub fn with_time_step(time_step_days: f64) -> TransitResult<Self> {
        if !time_step_days.is_finite() || time_step_days <= 0.0 {
            return Err(TransitError::config(format!(
                "time step must be a positive number of days, got {time_step_days}"
            )));
        }
        Ok(Self {
            clock: SimClock::new(),
            time_step_days,
        })
    }

    /// Paused → Playing. No-op if already playing; never changes time.
    pub fn play(&mut self) {
        self.clock.set_playing(true);
    }

    /// Playing → Paused. No-op if already paused.
    pub fn pause(&mut self) {
        self.clock.set_playing(false);
    }

    /// Any state → Paused with time zero.
    pub fn reset(&mut self) {
        self.clock.set_playing(false);
        self.clock.rewind();
    }

    /// Advance one frame: add one time step while playing, do nothing
    /// while paused.
    pub fn tick(&mut self) {
        if self.clock.is_playing() {
            self.clock.advance(self.time_step_days);
        }
    }

    /// Whether the controller is in the Playing state.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    /// Current simulated time (days).
    #[must_use]
    pub const fn time_days(&self) -> f64 {
        self.clock.time_days()
    }

    /// Configured time step (days per tick).
    #[must_use]
    pub const fn time_step_days(&self) -> f64 {
        self.time_step_days
    }

    /// Read access to the owned clock.
    #[must_use]
    pub const fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Simulated time scaled by the view-time speed multiplier.
    ///
    /// This is the effective time fed to the position model. The
    /// multiplier scales what the viewer sees; it never mutates the clock.
    #[must_use]
    pub fn effective_time(&self, speed_multiplier: f64) -> f64 {
        self.clock.time_days() * speed_multiplier
    }
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new()
    }
}
