//! Configuration errors
//!
//! Raised when a primitive is set up with parameters it cannot honour.
//! These fail fast at setup time and are never clamped.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Visibility threshold outside `[0, 1]` (or NaN)
    #[error("visibility threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f32),

    /// Typing cadence must be a positive number of milliseconds
    #[error("typing cadence must be positive, got {0}ms")]
    InvalidCadence(u32),

    /// Repeating timers need a non-zero period
    #[error("timer interval must be positive, got {0}ms")]
    InvalidInterval(u64),

    /// Meter fill targets are percentages
    #[error("fill percentage must be within [0, 100], got {0}")]
    InvalidPercent(u8),
}
