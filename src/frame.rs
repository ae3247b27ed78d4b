//! Per-cycle frame outputs.
//!
//! A [`FrameSnapshot`] is everything the render layer needs for one cycle:
//! the clock reading, both planet positions, and the transit flag. It is
//! recomputed fresh every cycle from the controller and the configured
//! bodies — derived state is never cached between cycles.

use serde::{Deserialize, Serialize};

use crate::controller::AnimationController;
use crate::orbit::{OrbitalBody, Position2D};
use crate::transit::is_transiting;

/// One animation frame's worth of derived state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Simulated time as held by the clock (days).
    pub time_days: f64,
    /// Simulated time scaled by the speed multiplier — the value actually
    /// fed to the position model (days).
    pub effective_time_days: f64,
    /// Earth position (AU).
    pub earth: Position2D,
    /// Venus position (AU).
    pub venus: Position2D,
    /// Whether the two planets are within the transit threshold.
    pub transiting: bool,
}

impl FrameSnapshot {
    /// Compute the frame for the controller's current clock reading.
    ///
    /// Pure with respect to its inputs: the same clock time, bodies, and
    /// multiplier always produce the same frame.
    #[must_use]
    pub fn capture(
        earth: &OrbitalBody,
        venus: &OrbitalBody,
        controller: &AnimationController,
        speed_multiplier: f64,
    ) -> Self {
        let time_days = controller.time_days();
        let effective_time_days = controller.effective_time(speed_multiplier);
        let earth_pos = earth.position_at(effective_time_days);
        let venus_pos = venus.position_at(effective_time_days);

        Self {
            time_days,
            effective_time_days,
            earth: earth_pos,
            venus: venus_pos,
            transiting: is_transiting(&earth_pos, &venus_pos),
        }
    }

    /// Separation between the two planets in this frame (AU).
    #[must_use]
    pub fn separation_au(&self) -> f64 {
        self.earth.distance_to(&self.venus)
    }
}
