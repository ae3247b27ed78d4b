//! # venus-transit
//!
//! Animated Earth/Venus orbital model with transit proximity detection.
//!
//! A deliberately simplified two-body illustration: both planets move on
//! flat circular orbits around a fixed Sun, and a transit is flagged when
//! their projected 2D positions come within a fixed threshold. This is an
//! animation aid, not an ephemeris:
//! - no gravitational integration, no eccentricity, no 3D geometry;
//! - the transit test is a proximity heuristic, not occultation geometry.
//!
//! ## Example
//!
//! ```rust
//! use venus_transit::prelude::*;
//!
//! let earth = OrbitalBody::earth();
//! let venus = OrbitalBody::venus();
//! let mut controller = AnimationController::new();
//!
//! controller.play();
//! controller.tick();
//!
//! let frame = FrameSnapshot::capture(&earth, &venus, &controller, 1.0);
//! assert!((frame.time_days - 2.0).abs() < f64::EPSILON);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
)]

pub mod cli;
pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod frame;
pub mod orbit;
pub mod render;
pub mod transit;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::clock::SimClock;
    pub use crate::config::{SimConfig, SimConfigBuilder};
    pub use crate::controller::{AnimationController, TICK_INTERVAL_MS, TIME_STEP_DAYS};
    pub use crate::error::{TransitError, TransitResult};
    pub use crate::frame::FrameSnapshot;
    pub use crate::orbit::{orbital_position, OrbitalBody, Position2D};
    pub use crate::transit::{is_transiting, separation, TRANSIT_THRESHOLD_AU};
}

/// Re-export for public API
pub use error::{TransitError, TransitResult};
