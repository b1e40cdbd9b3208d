//! # joint-limits
//!
//! Per-cycle enforcement of position, velocity and effort limits on a joint
//! command, applied after the controller and before the actuator.
//!
//! ## Features
//!
//! - **Mode-specific limiters**: position, velocity and effort controlled joints
//! - **Soft limits**: proportional braking before a hard bound is reached
//! - **Hard bounds never exceeded**: the hard clamp is always the last stage
//! - **Typed configuration errors**: an inverted range is returned as an error,
//!   never forwarded as a NaN command
//! - **no_std compatible**: no allocation on the enforcement path
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use joint_limits::{JointState, JointSystem};
//!
//! // Load configuration from TOML
//! let config = joint_limits::load_config("joints.toml")?;
//! let mut joints = JointSystem::from_config(&config)?;
//!
//! // Once per control cycle
//! let mut cmd = controller_output;
//! joints.enforce("shoulder", period, &JointState::new(pos, vel, eff), &mut cmd)?;
//! actuator.write(cmd);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt diagnostics for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod joint;
pub mod limiter;

// Re-exports for ergonomic API
pub use config::{validate_config, JointConfig, JointLimits, Range, SoftLimits, SystemConfig};
pub use error::{ConfigError, Error, LimitError, Result};
pub use joint::{JointState, JointSystem, LimitedJointHandle};
pub use limiter::{
    ControlMode, EffortJointLimiter, JointLimiter, LastCommand, Limits, ModeLimiter,
    PositionJointLimiter, VelocityJointLimiter,
};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
