//! Transit proximity detection.
//!
//! A transit is flagged when the two projected 2D positions come within a
//! fixed threshold of each other. This is a flat on-screen-distance
//! heuristic inherited from the reference animation: it ignores the Sun's
//! position and the actual line-of-sight geometry, and it is kept exactly
//! as-is rather than upgraded to a real occultation test.

use crate::orbit::Position2D;

/// Proximity threshold for the transit flag (AU).
pub const TRANSIT_THRESHOLD_AU: f64 = 0.15;

/// Euclidean separation between two positions (AU).
#[must_use]
pub fn separation(a: &Position2D, b: &Position2D) -> f64 {
    a.distance_to(b)
}

/// Whether the two positions are close enough to count as a transit.
///
/// Strict inequality: a separation of exactly [`TRANSIT_THRESHOLD_AU`]
/// is not a transit.
#[must_use]
pub fn is_transiting(a: &Position2D, b: &Position2D) -> bool {
    separation(a, b) < TRANSIT_THRESHOLD_AU
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Falsification: the predicate depends on argument order.
        #[test]
        fn prop_symmetric(
            ax in -2.0f64..2.0, ay in -2.0f64..2.0,
            bx in -2.0f64..2.0, by in -2.0f64..2.0,
        ) {
            let a = Position2D::new(ax, ay);
            let b = Position2D::new(bx, by);
            prop_assert_eq!(is_transiting(&a, &b), is_transiting(&b, &a));
        }

        /// Falsification: some position fails to transit with itself.
        #[test]
        fn prop_reflexive(x in -2.0f64..2.0, y in -2.0f64..2.0) {
            let p = Position2D::new(x, y);
            prop_assert!(is_transiting(&p, &p));
        }
    }
}
