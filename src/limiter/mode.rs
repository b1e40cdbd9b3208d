//! Control mode selection.

use serde::Deserialize;

use crate::error::Result;

use super::{EffortJointLimiter, JointLimiter, Limits, PositionJointLimiter, VelocityJointLimiter};

/// Quantity a joint's command represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlMode {
    /// Command is a position setpoint.
    #[default]
    Position,
    /// Command is a velocity setpoint.
    Velocity,
    /// Command is an effort (force or torque) setpoint.
    Effort,
}

impl ControlMode {
    /// Mode name for display/debugging.
    pub fn name(self) -> &'static str {
        match self {
            ControlMode::Position => "position",
            ControlMode::Velocity => "velocity",
            ControlMode::Effort => "effort",
        }
    }
}

/// Limiter for whichever control mode a joint is configured with.
#[derive(Debug, Clone)]
pub enum ModeLimiter {
    /// Position-controlled joint.
    Position(PositionJointLimiter),
    /// Velocity-controlled joint.
    Velocity(VelocityJointLimiter),
    /// Effort-controlled joint.
    Effort(EffortJointLimiter),
}

impl ModeLimiter {
    /// Create an unset limiter for `mode`.
    pub const fn for_mode(mode: ControlMode) -> Self {
        match mode {
            ControlMode::Position => ModeLimiter::Position(PositionJointLimiter::new()),
            ControlMode::Velocity => ModeLimiter::Velocity(VelocityJointLimiter::new()),
            ControlMode::Effort => ModeLimiter::Effort(EffortJointLimiter::new()),
        }
    }

    /// Get the control mode this limiter enforces.
    pub fn mode(&self) -> ControlMode {
        match self {
            ModeLimiter::Position(_) => ControlMode::Position,
            ModeLimiter::Velocity(_) => ControlMode::Velocity,
            ModeLimiter::Effort(_) => ControlMode::Effort,
        }
    }
}

impl From<ControlMode> for ModeLimiter {
    fn from(mode: ControlMode) -> Self {
        Self::for_mode(mode)
    }
}

impl JointLimiter for ModeLimiter {
    fn enforce_limits<L: Limits + ?Sized>(
        &mut self,
        period: f64,
        limits: &L,
        position: f64,
        velocity: f64,
        effort: f64,
        command: &mut f64,
    ) -> Result<()> {
        match self {
            ModeLimiter::Position(l) => {
                l.enforce_limits(period, limits, position, velocity, effort, command)
            }
            ModeLimiter::Velocity(l) => {
                l.enforce_limits(period, limits, position, velocity, effort, command)
            }
            ModeLimiter::Effort(l) => {
                l.enforce_limits(period, limits, position, velocity, effort, command)
            }
        }
    }

    fn last_command(&self) -> Option<f64> {
        match self {
            ModeLimiter::Position(l) => l.last_command(),
            ModeLimiter::Velocity(l) => l.last_command(),
            ModeLimiter::Effort(l) => l.last_command(),
        }
    }

    fn reset(&mut self) {
        match self {
            ModeLimiter::Position(l) => l.reset(),
            ModeLimiter::Velocity(l) => l.reset(),
            ModeLimiter::Effort(l) => l.reset(),
        }
    }
}
