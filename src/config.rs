//! Configuration with YAML schema and validation.
//!
//! Mistake-proofing happens here, once, at startup:
//! - type-safe configuration structs deserialized via serde;
//! - schema validation via the `validator` derive;
//! - semantic validation beyond the schema (finiteness, cross-checks).
//!
//! Per-tick computation never re-validates: a loaded `SimConfig` is proof
//! that every invariant (`radius > 0`, `period > 0`, speed multiplier in
//! range) already holds.

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{TransitError, TransitResult};
use crate::orbit::OrbitalBody;

/// Lower bound of the view-time speed multiplier.
pub const SPEED_MULTIPLIER_MIN: f64 = 0.5;

/// Upper bound of the view-time speed multiplier.
pub const SPEED_MULTIPLIER_MAX: f64 = 2.0;

/// Top-level animation configuration.
///
/// Loaded from YAML files with full schema validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SimConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Orbital parameters for both planets.
    #[validate(nested)]
    #[serde(default)]
    pub bodies: BodiesConfig,

    /// Animation timing and playback settings.
    #[validate(nested)]
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Render-only display settings.
    #[validate(nested)]
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

/// Orbital parameters for the two planets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct BodiesConfig {
    #[validate(nested)]
    pub earth: BodyConfig,
    #[validate(nested)]
    pub venus: BodyConfig,
}

impl Default for BodiesConfig {
    fn default() -> Self {
        Self {
            earth: BodyConfig {
                radius_au: 1.0,
                period_days: 365.25,
            },
            venus: BodyConfig {
                radius_au: 0.72,
                period_days: 224.7,
            },
        }
    }
}

/// One planet's orbital parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    /// Circular orbit radius (AU).
    #[validate(range(exclusive_min = 0.0))]
    pub radius_au: f64,
    /// Orbital period (days).
    #[validate(range(exclusive_min = 0.0))]
    pub period_days: f64,
}

impl BodyConfig {
    /// Build the validated runtime body.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for non-positive or non-finite
    /// parameters.
    pub fn build(&self) -> TransitResult<OrbitalBody> {
        OrbitalBody::new(self.radius_au, self.period_days)
    }
}

/// Animation timing and playback settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AnimationConfig {
    /// Simulated days added per tick.
    #[validate(range(exclusive_min = 0.0))]
    #[serde(default = "default_time_step_days")]
    pub time_step_days: f64,

    /// Real-time wait between driving-loop cycles (ms).
    #[validate(range(min = 1))]
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// View-time speed multiplier.
    #[validate(range(min = 0.5, max = 2.0))]
    #[serde(default = "default_speed_multiplier")]
    pub speed_multiplier: f64,
}

fn default_time_step_days() -> f64 {
    crate::controller::TIME_STEP_DAYS
}

fn default_tick_interval_ms() -> u64 {
    crate::controller::TICK_INTERVAL_MS
}

fn default_speed_multiplier() -> f64 {
    1.0
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            time_step_days: default_time_step_days(),
            tick_interval_ms: default_tick_interval_ms(),
            speed_multiplier: default_speed_multiplier(),
        }
    }
}

/// Render-only display settings. These never affect core state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Draw the orbital paths.
    #[serde(default = "default_show_orbits")]
    pub show_orbits: bool,

    /// Segments used to approximate each orbit circle.
    #[validate(range(min = 8))]
    #[serde(default = "default_orbit_samples")]
    pub orbit_samples: usize,
}

fn default_show_orbits() -> bool {
    true
}

fn default_orbit_samples() -> usize {
    200
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_orbits: default_show_orbits(),
            orbit_samples: default_orbit_samples(),
        }
    }
}

impl SimConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> TransitResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> TransitResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.ensure_valid()?;
        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> SimConfigBuilder {
        SimConfigBuilder::default()
    }

    /// Run schema and semantic validation on this configuration.
    ///
    /// Callers that mutate a loaded configuration (e.g. a CLI speed
    /// override) re-run this before using it.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint as a validation or
    /// configuration error.
    pub fn ensure_valid(&self) -> TransitResult<()> {
        self.validate()?;
        self.validate_semantic()
    }

    /// Validate semantic constraints beyond the schema.
    fn validate_semantic(&self) -> TransitResult<()> {
        // Range checks do not bound non-finite values from above.
        if !self.animation.time_step_days.is_finite() {
            return Err(TransitError::config("time step must be finite"));
        }
        if !self.animation.speed_multiplier.is_finite() {
            return Err(TransitError::config("speed multiplier must be finite"));
        }
        for (name, body) in [("earth", &self.bodies.earth), ("venus", &self.bodies.venus)] {
            if !body.radius_au.is_finite() || !body.period_days.is_finite() {
                return Err(TransitError::config(format!(
                    "{name} orbital parameters must be finite"
                )));
            }
        }
        Ok(())
    }

    /// Build the validated runtime bodies `(earth, venus)`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either body is invalid.
    pub fn build_bodies(&self) -> TransitResult<(OrbitalBody, OrbitalBody)> {
        Ok((self.bodies.earth.build()?, self.bodies.venus.build()?))
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            bodies: BodiesConfig::default(),
            animation: AnimationConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct SimConfigBuilder {
    time_step_days: Option<f64>,
    tick_interval_ms: Option<u64>,
    speed_multiplier: Option<f64>,
    show_orbits: Option<bool>,
}

impl SimConfigBuilder {
    /// Set the time step in simulated days per tick.
    #[must_use]
    pub const fn time_step_days(mut self, dt: f64) -> Self {
        self.time_step_days = Some(dt);
        self
    }

    /// Set the real-time tick interval in milliseconds.
    #[must_use]
    pub const fn tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval_ms = Some(ms);
        self
    }

    /// Set the view-time speed multiplier.
    #[must_use]
    pub const fn speed_multiplier(mut self, speed: f64) -> Self {
        self.speed_multiplier = Some(speed);
        self
    }

    /// Toggle orbit path drawing.
    #[must_use]
    pub const fn show_orbits(mut self, show: bool) -> Self {
        self.show_orbits = Some(show);
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint, same as loading from YAML.
    pub fn build(self) -> TransitResult<SimConfig> {
        let mut config = SimConfig::default();

        if let Some(dt) = self.time_step_days {
            config.animation.time_step_days = dt;
        }
        if let Some(ms) = self.tick_interval_ms {
            config.animation.tick_interval_ms = ms;
        }
        if let Some(speed) = self.speed_multiplier {
            config.animation.speed_multiplier = speed;
        }
        if let Some(show) = self.show_orbits {
            config.display.show_orbits = show;
        }

        config.ensure_valid()?;
        Ok(config)
    }
}
