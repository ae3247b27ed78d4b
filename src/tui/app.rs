//! Transit TUI application state and logic.
//!
//! This module contains the testable state and logic for the transit TUI.
//! Terminal I/O is handled by the binary, but all state management lives
//! here. The app owns the session: bodies and controller are constructed
//! once and mutated in place, so the clock survives every redraw cycle.

use crossterm::event::KeyCode;

use crate::config::{SimConfig, SPEED_MULTIPLIER_MAX, SPEED_MULTIPLIER_MIN};
use crate::controller::AnimationController;
use crate::error::TransitResult;
use crate::frame::FrameSnapshot;
use crate::orbit::OrbitalBody;
use crate::render::{render_frame, RenderCommand, SceneOptions};

/// Embedded default Earth/Venus YAML configuration.
const DEFAULT_CONFIG_YAML: &str = include_str!("../../configs/earth_venus.yaml");

/// Speed multiplier change per key press.
const SPEED_STEP: f64 = 0.25;

/// Application state for the transit TUI.
pub struct TransitApp {
    /// Earth orbital parameters.
    pub earth: OrbitalBody,
    /// Venus orbital parameters.
    pub venus: OrbitalBody,
    /// Session clock and playback state machine.
    pub controller: AnimationController,
    /// View-time speed multiplier.
    pub speed_multiplier: f64,
    /// Whether orbit paths are drawn.
    pub show_orbits: bool,
    /// Segments per orbit circle.
    pub orbit_samples: usize,
    /// Real-time wait between driving-loop cycles (ms).
    pub tick_interval_ms: u64,
    /// Redraw cycle counter.
    pub frame_count: u64,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl TransitApp {
    /// Create the app with the embedded default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_yaml(DEFAULT_CONFIG_YAML).unwrap_or_else(|_| Self::stock())
    }

    /// Fallback session with preset bodies and default timing.
    fn stock() -> Self {
        Self {
            earth: OrbitalBody::earth(),
            venus: OrbitalBody::venus(),
            controller: AnimationController::new(),
            speed_multiplier: 1.0,
            show_orbits: true,
            orbit_samples: 200,
            tick_interval_ms: crate::controller::TICK_INTERVAL_MS,
            frame_count: 0,
            should_quit: false,
        }
    }

    /// Create from a YAML configuration string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> TransitResult<Self> {
        Self::from_config(&SimConfig::from_yaml(yaml)?)
    }

    /// Create from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the bodies or time step are
    /// invalid.
    pub fn from_config(config: &SimConfig) -> TransitResult<Self> {
        let (earth, venus) = config.build_bodies()?;
        let controller = AnimationController::with_time_step(config.animation.time_step_days)?;

        Ok(Self {
            earth,
            venus,
            controller,
            speed_multiplier: config.animation.speed_multiplier,
            show_orbits: config.display.show_orbits,
            orbit_samples: config.display.orbit_samples,
            tick_interval_ms: config.animation.tick_interval_ms,
            frame_count: 0,
            should_quit: false,
        })
    }

    /// Advance one redraw cycle: exactly one tick, then count the frame.
    ///
    /// The tick is a no-op while paused; the frame counter tracks redraw
    /// cycles, not time steps.
    pub fn update(&mut self) {
        self.controller.tick();
        self.frame_count += 1;
    }

    /// Capture the current frame for rendering.
    #[must_use]
    pub fn current_frame(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.earth, &self.venus, &self.controller, self.speed_multiplier)
    }

    /// Build the platform-agnostic scene for the current frame.
    #[must_use]
    pub fn scene(&self) -> Vec<RenderCommand> {
        let options = SceneOptions {
            show_orbits: self.show_orbits,
            orbit_samples: self.orbit_samples,
        };
        render_frame(&self.current_frame(), &self.earth, &self.venus, &options)
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => {
                if self.controller.is_playing() {
                    self.controller.pause();
                } else {
                    self.controller.play();
                }
            }
            KeyCode::Char('r') => self.controller.reset(),
            KeyCode::Char('o') => self.show_orbits = !self.show_orbits,
            KeyCode::Char('+' | '=') => {
                self.speed_multiplier =
                    (self.speed_multiplier + SPEED_STEP).min(SPEED_MULTIPLIER_MAX);
            }
            KeyCode::Char('-') => {
                self.speed_multiplier =
                    (self.speed_multiplier - SPEED_STEP).max(SPEED_MULTIPLIER_MIN);
            }
            _ => {}
        }
    }
}

impl Default for TransitApp {
    fn default() -> Self {
        Self::new()
    }
}
