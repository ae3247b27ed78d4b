//! Platform-agnostic render commands for the transit animation.
//!
//! Implements the command pattern for rendering: the core emits a scene as
//! a list of [`RenderCommand`]s and any front end (the ratatui binary, the
//! headless frame printer, or something else entirely) decides how to draw
//! them. Coordinates are world-space AU with the Sun at the origin.

use serde::{Deserialize, Serialize};

use crate::frame::FrameSnapshot;
use crate::orbit::OrbitalBody;

/// RGBA color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create new color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    // Common colors
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    // Celestial body colors
    pub const SUN: Self = Self::rgb(255, 204, 0);
    pub const EARTH: Self = Self::rgb(100, 149, 237);
    pub const VENUS: Self = Self::rgb(255, 198, 73);
}

/// Platform-agnostic render command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Clear the screen.
    Clear { color: Color },

    /// Draw a filled or outlined circle (a body marker).
    DrawCircle {
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
        filled: bool,
    },

    /// Draw an orbit path (series of points).
    DrawOrbitPath {
        points: Vec<(f64, f64)>,
        color: Color,
    },

    /// Draw a text label.
    DrawText {
        x: f64,
        y: f64,
        text: String,
        color: Color,
    },

    /// Highlight a body (transit in progress).
    HighlightBody {
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
    },
}

/// Scene construction options owned by the view layer.
///
/// These are render-only inputs: toggling them never touches core state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneOptions {
    /// Draw the orbital paths.
    pub show_orbits: bool,
    /// Number of segments used to approximate each orbit circle.
    pub orbit_samples: usize,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            show_orbits: true,
            orbit_samples: 200,
        }
    }
}

// Marker radii in AU, chosen for legibility rather than physical scale.
const SUN_MARKER_AU: f64 = 0.08;
const EARTH_MARKER_AU: f64 = 0.05;
const VENUS_MARKER_AU: f64 = 0.04;

/// Sample a closed circular orbit path around the origin.
///
/// Returns `samples + 1` points; the final point repeats the first so the
/// path closes.
#[must_use]
pub fn orbit_path(radius_au: f64, samples: usize) -> Vec<(f64, f64)> {
    (0..=samples)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / samples as f64;
            (radius_au * angle.cos(), radius_au * angle.sin())
        })
        .collect()
}

/// Build the scene for one frame.
#[must_use]
pub fn render_frame(
    frame: &FrameSnapshot,
    earth: &OrbitalBody,
    venus: &OrbitalBody,
    options: &SceneOptions,
) -> Vec<RenderCommand> {
    let mut commands = Vec::new();

    commands.push(RenderCommand::Clear {
        color: Color::BLACK,
    });

    if options.show_orbits {
        commands.push(RenderCommand::DrawOrbitPath {
            points: orbit_path(earth.radius_au(), options.orbit_samples),
            color: Color::EARTH,
        });
        commands.push(RenderCommand::DrawOrbitPath {
            points: orbit_path(venus.radius_au(), options.orbit_samples),
            color: Color::VENUS,
        });
    }

    commands.push(RenderCommand::DrawCircle {
        x: 0.0,
        y: 0.0,
        radius: SUN_MARKER_AU,
        color: Color::SUN,
        filled: true,
    });
    commands.push(RenderCommand::DrawText {
        x: SUN_MARKER_AU + 0.02,
        y: 0.0,
        text: "Sun".to_string(),
        color: Color::WHITE,
    });

    commands.push(RenderCommand::DrawCircle {
        x: frame.earth.x,
        y: frame.earth.y,
        radius: EARTH_MARKER_AU,
        color: Color::EARTH,
        filled: true,
    });
    commands.push(RenderCommand::DrawText {
        x: frame.earth.x + EARTH_MARKER_AU + 0.02,
        y: frame.earth.y,
        text: "Earth".to_string(),
        color: Color::WHITE,
    });

    commands.push(RenderCommand::DrawCircle {
        x: frame.venus.x,
        y: frame.venus.y,
        radius: VENUS_MARKER_AU,
        color: Color::VENUS,
        filled: true,
    });
    commands.push(RenderCommand::DrawText {
        x: frame.venus.x + VENUS_MARKER_AU + 0.02,
        y: frame.venus.y,
        text: "Venus".to_string(),
        color: Color::WHITE,
    });

    if frame.transiting {
        commands.push(RenderCommand::HighlightBody {
            x: frame.venus.x,
            y: frame.venus.y,
            radius: VENUS_MARKER_AU * 2.0,
            color: Color::RED,
        });
        commands.push(RenderCommand::DrawText {
            x: 0.0,
            y: earth.radius_au() + 0.15,
            text: "TRANSIT IN PROGRESS".to_string(),
            color: Color::RED,
        });
    }

    commands
}
