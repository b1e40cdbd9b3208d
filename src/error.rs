//! Error types for joint-limits library.
//!
//! Provides unified error handling across configuration and per-cycle limit enforcement.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all joint-limits operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Error detected while enforcing limits during a control cycle
    Limit(LimitError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Joint name not found in configuration
    JointNotFound(heapless::String<32>),
    /// Duplicate joint name in configuration
    DuplicateJointName(heapless::String<32>),
    /// Joint name longer than 32 bytes (truncated copy)
    JointNameTooLong(heapless::String<32>),
    /// Too many joints for the fixed-capacity registry
    TooManyJoints,
    /// Hard range is inverted (min must be <= max)
    InvalidRange {
        /// Which quantity the range bounds
        quantity: &'static str,
        /// Minimum bound
        min: f64,
        /// Maximum bound
        max: f64,
    },
    /// Invalid max velocity (must be > 0)
    InvalidMaxVelocity(f64),
    /// Soft thresholds are inverted or lie outside the hard position range
    InvalidSoftLimits {
        /// Lower soft position threshold
        min: f64,
        /// Upper soft position threshold
        max: f64,
    },
    /// Soft limit gain is negative or not finite
    InvalidGain(f64),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Errors raised by the enforcement path.
///
/// These never carry a NaN command: the clamp site returns the error instead of
/// forwarding the sentinel produced by [`clamp_checked`](crate::limiter::clamp_checked).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LimitError {
    /// A clamp was requested with `min > max`
    InvalidRange {
        /// Minimum bound
        min: f64,
        /// Maximum bound
        max: f64,
    },
    /// Control period must be finite and > 0
    InvalidPeriod(f64),
    /// Desired or measured input is NaN or infinite
    NonFinite(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Limit(e) => write!(f, "Limit error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::JointNotFound(name) => write!(f, "Joint '{}' not found", name),
            ConfigError::DuplicateJointName(name) => write!(f, "Duplicate joint name: '{}'", name),
            ConfigError::JointNameTooLong(name) => {
                write!(f, "Joint name too long (max 32 bytes): '{}...'", name)
            }
            ConfigError::TooManyJoints => write!(f, "Too many joints"),
            ConfigError::InvalidRange { quantity, min, max } => {
                write!(f, "Invalid {} range: min ({}) must be <= max ({})", quantity, min, max)
            }
            ConfigError::InvalidMaxVelocity(v) => write!(f, "Invalid max velocity: {}. Must be > 0", v),
            ConfigError::InvalidSoftLimits { min, max } => {
                write!(
                    f,
                    "Invalid soft limits: [{}, {}] must be ordered and inside the position range",
                    min, max
                )
            }
            ConfigError::InvalidGain(k) => write!(f, "Invalid soft limit gain: {}. Must be >= 0", k),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for LimitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitError::InvalidRange { min, max } => {
                write!(f, "Invalid bound range: min ({}) > max ({})", min, max)
            }
            LimitError::InvalidPeriod(p) => write!(f, "Invalid control period: {}", p),
            LimitError::NonFinite(v) => write!(f, "Non-finite input: {}", v),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<LimitError> for Error {
    fn from(e: LimitError) -> Self {
        Error::Limit(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for LimitError {}
