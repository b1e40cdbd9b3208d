//! Limiter for effort-controlled joints.

use crate::error::Result;

use super::bounds::{clamp, project_bounds};
use super::register::LastCommand;
use super::{check_finite, check_period, JointLimiter, Limits};

/// Enforces soft limits, the hard effort range and the position-safety stop
/// on an effort command.
///
/// Soft limiting cascades two projections: the position margin yields a
/// velocity bound pair, and the measured velocity's margin to that pair yields
/// an effort bound pair (gain `k_velocity`).
#[derive(Debug, Clone, Default)]
pub struct EffortJointLimiter {
    last_command: LastCommand,
}

impl EffortJointLimiter {
    /// Create a limiter with no previous command.
    pub const fn new() -> Self {
        Self {
            last_command: LastCommand::new(),
        }
    }
}

impl JointLimiter for EffortJointLimiter {
    fn enforce_limits<L: Limits + ?Sized>(
        &mut self,
        period: f64,
        limits: &L,
        position: f64,
        velocity: f64,
        _effort: f64,
        command: &mut f64,
    ) -> Result<()> {
        check_period(period)?;
        let position = check_finite(position)?;
        let mut cmd = check_finite(*command)?;

        // No stage in this mode is rate-based, so no reference effort is tracked
        if let Some(soft) = limits.soft_limits() {
            let velocity = check_finite(velocity)?;
            let (vel_lower, vel_upper) = limits.velocity_soft_bounds(position);
            let (eff_lower, eff_upper) =
                project_bounds(velocity, soft.k_velocity, vel_lower, vel_upper);

            let eff_lower = limits.limit_effort(eff_lower)?;
            let eff_upper = limits.limit_effort(eff_upper)?;
            cmd = clamp(cmd, eff_lower, eff_upper)?;
        }

        cmd = limits.limit_effort(cmd)?;

        // The stop yields zero, which an offset effort range may exclude
        cmd = limits.stop_on_position_limit(cmd, position);
        cmd = limits.limit_effort(cmd)?;

        *command = cmd;
        self.last_command.set(cmd);
        Ok(())
    }

    fn last_command(&self) -> Option<f64> {
        self.last_command.get()
    }

    fn reset(&mut self) {
        self.last_command.reset();
    }
}
