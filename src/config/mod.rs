//! Configuration module for joint-limits.
//!
//! Provides types for loading and validating joint limit configurations
//! from TOML files (with `std` feature) or pre-parsed data.

mod joint;
mod limits;
#[cfg(feature = "std")]
mod loader;
mod system;
mod validation;

pub use joint::JointConfig;
pub use limits::{JointLimits, Range, SoftLimits};
pub use system::{SystemConfig, MAX_JOINTS};
pub use validation::{validate_config, validate_limits};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
