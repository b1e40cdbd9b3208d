//! Joint handle that applies limits before a command reaches the actuator.

use heapless::String;

use crate::config::{validate_limits, JointConfig, JointLimits};
use crate::error::Result;
use crate::limiter::{ControlMode, JointLimiter, ModeLimiter};

use super::state::JointState;

/// A named joint with its limits and the limiter for its control mode.
#[derive(Debug, Clone)]
pub struct LimitedJointHandle {
    /// Joint name for logging/debugging.
    name: String<32>,

    /// Limits consulted every cycle.
    limits: JointLimits,

    /// Limiter holding the last emitted command.
    limiter: ModeLimiter,
}

impl LimitedJointHandle {
    /// Create a handle for a joint in `mode`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `limits` fail validation.
    pub fn new(name: String<32>, mode: ControlMode, limits: JointLimits) -> Result<Self> {
        validate_limits(&limits)?;

        Ok(Self {
            name,
            limits,
            limiter: ModeLimiter::for_mode(mode),
        })
    }

    /// Create a handle from a joint configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the joint's limits fail validation.
    pub fn from_config(name: String<32>, config: &JointConfig) -> Result<Self> {
        Self::new(name, config.mode, config.limits.clone())
    }

    /// Get the joint name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the control mode.
    #[inline]
    pub fn mode(&self) -> ControlMode {
        self.limiter.mode()
    }

    /// Get the limits.
    #[inline]
    pub fn limits(&self) -> &JointLimits {
        &self.limits
    }

    /// Command emitted on the last successful cycle, if any.
    #[inline]
    pub fn last_command(&self) -> Option<f64> {
        self.limiter.last_command()
    }

    /// Enforce limits on `command` for one cycle of length `period` seconds.
    ///
    /// # Errors
    ///
    /// See [`JointLimiter::enforce_limits`]; on error `command` must not be
    /// forwarded to the actuator.
    pub fn enforce(&mut self, period: f64, state: &JointState, command: &mut f64) -> Result<()> {
        self.limiter.enforce_limits(
            period,
            &self.limits,
            state.position,
            state.velocity,
            state.effort,
            command,
        )
    }

    /// Forget the last command, e.g. after the controller restarts.
    pub fn reset(&mut self) {
        self.limiter.reset();
    }
}
