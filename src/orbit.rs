//! Circular orbital position model.
//!
//! Maps `(time, radius, period)` to a point on a flat circular orbit
//! centered on the Sun at the origin. Time is measured in days, lengths in
//! astronomical units. The model is pure and deterministic: a position is a
//! function of its arguments and nothing else.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{TransitError, TransitResult};

/// A projected 2D position in astronomical units.
///
/// Ephemeral derived value: recomputed fresh from a clock reading and a
/// body each cycle, never stored between cycles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position2D {
    pub x: f64,
    pub y: f64,
}

impl Position2D {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin (the fixed Sun).
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Euclidean distance to another position (AU).
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Distance from the origin (AU).
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Check if both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Compute the position on a circular orbit at a given time.
///
/// `angle = 2π · time / period`, `x = radius · cos(angle)`,
/// `y = radius · sin(angle)`.
///
/// Pure and total. `period_days != 0` is a precondition, not a runtime
/// check: a zero period produces non-finite output. Constructing bodies
/// through [`OrbitalBody::new`] makes the violation unreachable.
#[must_use]
pub fn orbital_position(time_days: f64, radius_au: f64, period_days: f64) -> Position2D {
    let angle = 2.0 * PI * time_days / period_days;
    Position2D::new(radius_au * angle.cos(), radius_au * angle.sin())
}

/// An orbiting body: a circular orbit radius and a period, nothing more.
///
/// Immutable, configured once at startup. Construction is the fail-fast
/// validation point for the `radius > 0`, `period > 0` invariants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalBody {
    radius_au: f64,
    period_days: f64,
}

impl OrbitalBody {
    /// Create a body, rejecting invalid orbital parameters.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either parameter is non-positive
    /// or non-finite.
    pub fn new(radius_au: f64, period_days: f64) -> TransitResult<Self> {
        if !radius_au.is_finite() || radius_au <= 0.0 {
            return Err(TransitError::config(format!(
                "orbit radius must be a positive number of AU, got {radius_au}"
            )));
        }
        if !period_days.is_finite() || period_days <= 0.0 {
            return Err(TransitError::config(format!(
                "orbital period must be a positive number of days, got {period_days}"
            )));
        }
        Ok(Self {
            radius_au,
            period_days,
        })
    }

    /// Earth: 1.0 AU, 365.25 days.
    #[must_use]
    pub const fn earth() -> Self {
        Self {
            radius_au: 1.0,
            period_days: 365.25,
        }
    }

    /// Venus: 0.72 AU, 224.7 days.
    #[must_use]
    pub const fn venus() -> Self {
        Self {
            radius_au: 0.72,
            period_days: 224.7,
        }
    }

    /// Orbit radius (AU).
    #[must_use]
    pub const fn radius_au(&self) -> f64 {
        self.radius_au
    }

    /// Orbital period (days).
    #[must_use]
    pub const fn period_days(&self) -> f64 {
        self.period_days
    }

    /// Position of this body at the given simulated time.
    #[must_use]
    pub fn position_at(&self, time_days: f64) -> Position2D {
        orbital_position(time_days, self.radius_au, self.period_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_position_at_time_zero() {
        let pos = orbital_position(0.0, 1.0, 365.25);
        assert!((pos.x - 1.0).abs() < TOL);
        assert!(pos.y.abs() < TOL);
    }

    #[test]
    fn test_position_quarter_period() {
        let pos = orbital_position(100.0, 2.0, 400.0);
        assert!(pos.x.abs() < TOL);
        assert!((pos.y - 2.0).abs() < TOL);
    }

    #[test]
    fn test_position_half_period() {
        let pos = orbital_position(200.0, 2.0, 400.0);
        assert!((pos.x + 2.0).abs() < TOL);
        assert!(pos.y.abs() < 1e-9);
    }

    #[test]
    fn test_earth_preset() {
        let earth = OrbitalBody::earth();
        assert!((earth.radius_au() - 1.0).abs() < f64::EPSILON);
        assert!((earth.period_days() - 365.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_venus_preset() {
        let venus = OrbitalBody::venus();
        assert!((venus.radius_au() - 0.72).abs() < f64::EPSILON);
        assert!((venus.period_days() - 224.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_new_rejects_zero_radius() {
        assert!(OrbitalBody::new(0.0, 365.25).is_err());
    }

    #[test]
    fn test_new_rejects_negative_period() {
        assert!(OrbitalBody::new(1.0, -1.0).is_err());
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(OrbitalBody::new(f64::NAN, 365.25).is_err());
        assert!(OrbitalBody::new(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_new_accepts_valid() {
        let body = OrbitalBody::new(0.72, 224.7);
        assert!(body.is_ok());
    }

    #[test]
    fn test_position_at_delegates() {
        let earth = OrbitalBody::earth();
        let direct = orbital_position(42.0, 1.0, 365.25);
        let via_body = earth.position_at(42.0);
        assert!((direct.x - via_body.x).abs() < TOL);
        assert!((direct.y - via_body.y).abs() < TOL);
    }

    #[test]
    fn test_distance_to() {
        let a = Position2D::new(1.0, 0.0);
        let b = Position2D::new(0.72, 0.0);
        assert!((a.distance_to(&b) - 0.28).abs() < TOL);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Position2D::new(0.3, -0.4);
        let b = Position2D::new(-1.1, 0.2);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < TOL);
    }

    #[test]
    fn test_magnitude() {
        let p = Position2D::new(3.0, 4.0);
        assert!((p.magnitude() - 5.0).abs() < TOL);
    }

    #[test]
    fn test_origin() {
        let o = Position2D::origin();
        assert!(o.magnitude().abs() < TOL);
    }

    #[test]
    fn test_is_finite() {
        assert!(Position2D::new(1.0, 2.0).is_finite());
        assert!(!Position2D::new(f64::NAN, 0.0).is_finite());
    }

    #[test]
    fn test_zero_period_is_non_finite() {
        // Documented precondition: period 0 propagates NaN, no panic.
        let pos = orbital_position(1.0, 1.0, 0.0);
        assert!(!pos.is_finite());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Falsification: the position leaves the circle of radius r.
        #[test]
        fn prop_position_on_circle(
            time in -10_000.0f64..10_000.0,
            radius in 0.01f64..100.0,
            period in 0.1f64..10_000.0,
        ) {
            let pos = orbital_position(time, radius, period);
            let r2 = pos.x * pos.x + pos.y * pos.y;
            prop_assert!((r2 - radius * radius).abs() < 1e-9 * radius * radius + 1e-12);
        }

        /// Falsification: advancing by one full period moves the body.
        #[test]
        fn prop_periodicity(
            time in -1000.0f64..1000.0,
            radius in 0.01f64..10.0,
            period in 1.0f64..1000.0,
        ) {
            let a = orbital_position(time, radius, period);
            let b = orbital_position(time + period, radius, period);
            prop_assert!(a.distance_to(&b) < 1e-6);
        }

        /// Falsification: the same inputs produce different positions.
        #[test]
        fn prop_deterministic(
            time in -1000.0f64..1000.0,
            radius in 0.01f64..10.0,
            period in 1.0f64..1000.0,
        ) {
            let a = orbital_position(time, radius, period);
            let b = orbital_position(time, radius, period);
            prop_assert_eq!(a, b);
        }
    }
}
