//! Error types for venus-transit.
//!
//! The core animation operations are total: positions, transit checks, and
//! clock transitions cannot fail. Every fallible path is a configuration or
//! startup path, so the taxonomy is small and checked once, up front.

use thiserror::Error;

/// Result type alias for venus-transit operations.
pub type TransitResult<T> = Result<T, TransitError>;

/// Unified error type for all venus-transit operations.
///
/// Invalid orbital parameters are rejected when an [`crate::orbit::OrbitalBody`]
/// or [`crate::config::SimConfig`] is constructed, never re-checked per tick.
#[derive(Debug, Error)]
pub enum TransitError {
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TransitError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
