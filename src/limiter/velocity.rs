//! Limiter for velocity-controlled joints.

use crate::error::Result;

use super::bounds::clamp;
use super::register::LastCommand;
use super::{check_finite, check_period, JointLimiter, Limits};

/// Enforces soft limits, the hard velocity cap and the position-safety stop
/// on a velocity command.
///
/// Soft bounds are evaluated at the measured position. Effort is not checked
/// in this mode.
#[derive(Debug, Clone, Default)]
pub struct VelocityJointLimiter {
    last_command: LastCommand,
}

impl VelocityJointLimiter {
    /// Create a limiter with no previous command.
    pub const fn new() -> Self {
        Self {
            last_command: LastCommand::new(),
        }
    }
}

impl JointLimiter for VelocityJointLimiter {
    fn enforce_limits<L: Limits + ?Sized>(
        &mut self,
        period: f64,
        limits: &L,
        position: f64,
        _velocity: f64,
        _effort: f64,
        command: &mut f64,
    ) -> Result<()> {
        let period = check_period(period)?;
        let position = check_finite(position)?;
        let mut cmd = check_finite(*command)?;

        // No stage in this mode is rate-based, so no reference velocity is tracked
        if limits.has_soft_limits() {
            let (lower, upper) = limits.velocity_soft_bounds(position);
            cmd = clamp(cmd, lower, upper)?;
        }

        if let Some(max_vel) = limits.velocity_limit(period) {
            cmd = clamp(cmd, -max_vel, max_vel)?;
        }

        cmd = limits.stop_on_position_limit(cmd, position);

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SoftLimits;
    use crate::limiter::test_support::{hard_only, with_soft};

    #[test]
    fn test_hard_velocity_cap() {
        let limits = hard_only(None, Some(2.0), None);
        let mut limiter = VelocityJointLimiter::new();

        let mut cmd = 5.0;
        limiter.enforce_limits(0.01, &limits, 0.0, 0.0, 0.0, &mut cmd).unwrap();
        assert_eq!(cmd, 2.0);

        let mut cmd = -5.0;
        limiter.enforce_limits(0.01, &limits, 0.0, 0.0, 0.0, &mut cmd).unwrap();
        assert_eq!(cmd, -2.0);
        assert_eq!(limiter.last_command(), Some(-2.0));
    }

    #[test]
    fn test_soft_bounds_use_measured_position() {
        let limits = with_soft(
            hard_only(Some((-1.0, 1.0)), None, None),
            SoftLimits::new(-0.5, 0.5, 4.0, 1.0),
        );
        let mut limiter = VelocityJointLimiter::new();

        // Upper bound at 0.25: -4 * (0.25 - 0.5) = 1.0
        let mut cmd = 3.0;
        limiter.enforce_limits(0.01, &limits, 0.25, 0.0, 0.0, &mut cmd).unwrap();
        assert!((cmd - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_stop_at_hard_position_bound() {
        let limits = hard_only(Some((-1.0, 1.0)), Some(2.0), None);
        let mut limiter = VelocityJointLimiter::new();

        let mut cmd = 1.0;
        limiter.enforce_limits(0.01, &limits, 1.0, 0.0, 0.0, &mut cmd).unwrap();
        assert_eq!(cmd, 0.0);

        // Moving back inside is allowed
        let mut cmd = -1.0;
        limiter.enforce_limits(0.01, &limits, 1.0, 0.0, 0.0, &mut cmd).unwrap();
        assert_eq!(cmd, -1.0);
    }

    #[test]
    fn test_no_limits_is_pass_through() {
        let limits = hard_only(None, None, None);
        let mut limiter = VelocityJointLimiter::new();

        let mut cmd = 42.0;
        limiter.enforce_limits(0.01, &limits, 0.0, 0.0, 0.0, &mut cmd).unwrap();
        assert_eq!(cmd, 42.0);
    }
}
