//! Error types for cuboid fitting.

use thiserror::Error;

/// Result type alias for cuboid fitting operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building geometries or configuring a solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An edge was zero, negative or not a finite number.
    #[error("Invalid dimension: {axis} must be a positive finite number, got {value}")]
    InvalidDimension {
        /// Name of the offending axis.
        axis: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl Error {
    /// Builds an [`Error::InvalidDimension`] for the given axis.
    pub fn invalid_dimension(axis: &'static str, value: f64) -> Self {
        Self::InvalidDimension { axis, value }
    }
}
