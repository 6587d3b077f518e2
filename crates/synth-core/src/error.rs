//! Error types for generator configuration.

use thiserror::Error;

/// Errors raised when a [`crate::GenerationConfig`] contains an out-of-domain
/// parameter.
///
/// All checks run once, before any sampling begins. Once a configuration has
/// validated, generation itself cannot fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error reading a configuration file.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing configuration YAML.
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A probability outside [0, 1].
    #[error("Probability '{field}' must be within [0, 1], got {value}")]
    InvalidProbability { field: &'static str, value: f64 },

    /// A negative standard deviation.
    #[error("Standard deviation '{field}' must be non-negative, got {value}")]
    NegativeStdDev { field: &'static str, value: f64 },

    /// A parameter that must be non-negative.
    #[error("Value '{field}' must be non-negative, got {value}")]
    NegativeValue { field: &'static str, value: f64 },

    /// A mean that must be strictly positive (exponential and ratio means).
    #[error("Mean '{field}' must be positive, got {value}")]
    NonPositiveMean { field: &'static str, value: f64 },

    /// A clip bound or uniform range with lower above upper.
    #[error("Bounds '{field}' are inverted: min {min} > max {max}")]
    InvalidBounds {
        field: &'static str,
        min: f64,
        max: f64,
    },
}
