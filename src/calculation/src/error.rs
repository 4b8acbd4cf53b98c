//! Configuration errors.
//!
//! The numeric pipeline itself never fails: infeasible grid cells are
//! represented as undefined values. The only errors are malformed
//! configurations, rejected once by [`SweepConfig::validate`].
//!
//! [`SweepConfig::validate`]: crate::config::SweepConfig::validate

use thiserror::Error;

/// Result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A configuration value that would make the sweep undefined.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// An axis range produces no grid points
    #[error("axis `{axis}` is empty: start {start}, stop {stop}, step {step}")]
    EmptyAxis {
        axis: &'static str,
        start: f64,
        stop: f64,
        step: f64,
    },

    /// An axis or sweep step is zero, negative or not finite
    #[error("`{axis}` step must be positive, got {step}")]
    NonPositiveStep { axis: &'static str, step: f64 },

    /// A physical constant that must be strictly positive
    #[error("`{name}` must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// A duration that is negative or not finite
    #[error("`{name}` must be a finite, non-negative duration, got {value}")]
    InvalidDuration { name: &'static str, value: f64 },

    /// A bank angle outside [0°, 90°)
    #[error("bank angle {angle_deg}° is outside [0°, 90°)")]
    AngleOutOfRange { angle_deg: f64 },

    /// The bank-angle sweep has no entries
    #[error("bank-angle sweep is empty")]
    EmptyAngleSweep,
}
