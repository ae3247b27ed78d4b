//! Simulation clock state.
//!
//! [`SimClock`] is the only mutable session state in the core: the current
//! simulated time in days and the playing flag. It is created once per
//! session and owned explicitly by an
//! [`crate::controller::AnimationController`]; nothing else mutates it.

use serde::{Deserialize, Serialize};

/// Session-held clock: simulated time (days) and play state.
///
/// `time_days` is non-negative and monotonically non-decreasing while
/// playing; the only way back to zero is a reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimClock {
    time_days: f64,
    playing: bool,
}

impl SimClock {
    /// Create a clock at the session-start state: time zero, paused.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            time_days: 0.0,
            playing: false,
        }
    }

    /// Current simulated time (days).
    #[must_use]
    pub const fn time_days(&self) -> f64 {
        self.time_days
    }

    /// Whether the clock is in the Playing state.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Set the play state. Controller-internal.
    pub(crate) fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Advance simulated time by one step. Controller-internal.
    pub(crate) fn advance(&mut self, step_days: f64) {
        self.time_days += step_days;
    }

    /// Return simulated time to zero. Controller-internal.
    pub(crate) fn rewind(&mut self) {
        self.time_days = 0.0;
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}
