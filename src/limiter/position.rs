//! Limiter for position-controlled joints.

use crate::error::Result;

use super::bounds::clamp;
use super::register::LastCommand;
use super::{check_finite, check_period, JointLimiter, Limits};

/// Enforces soft limits, the velocity rate limit and the hard position range
/// on a position command.
///
/// Stages run in order: soft-limit braking, rate limit, hard position clamp.
/// The hard clamp runs last so nothing can override it. Effort is not checked
/// in this mode.
#[derive(Debug, Clone, Default)]
pub struct PositionJointLimiter {
    last_command: LastCommand,
}

impl PositionJointLimiter {
    /// Create a limiter with no previous command.
    pub const fn new() -> Self {
        Self {
            last_command: LastCommand::new(),
        }
    }
}

impl JointLimiter for PositionJointLimiter {
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
        let mut cmd = check_finite(*command)?;

        // First cycle starts from the measured position, not from zero
        let reference = match self.last_command.get() {
            Some(last) => last,
            None => check_finite(position)?,
        };

        if limits.has_soft_limits() {
            let (lower, upper) = limits.velocity_soft_bounds(reference);
            cmd = clamp(cmd, reference + lower * period, reference + upper * period)?;
        }

        if let Some(max_vel) = limits.velocity_limit(period) {
            cmd = clamp(cmd, reference - max_vel * period, reference + max_vel * period)?;
        }

        cmd = limits.limit_position(cmd)?;

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
    use crate::error::{Error, LimitError};
    use crate::limiter::test_support::{hard_only, with_soft};

    #[test]
    fn test_first_cycle_uses_measured_position() {
        let limits = hard_only(None, Some(1.0), None);
        let mut limiter = PositionJointLimiter::new();

        // Desired equals measured: no jump injected
        let mut cmd = 0.3;
        limiter.enforce_limits(0.01, &limits, 0.3, 0.0, 0.0, &mut cmd).unwrap();
        assert_eq!(cmd, 0.3);
        assert_eq!(limiter.last_command(), Some(0.3));
    }

    #[test]
    fn test_rate_limit_from_last_command() {
        let limits = hard_only(None, Some(1.0), None);
        let mut limiter = PositionJointLimiter::new();

        let mut cmd = 0.0;
        limiter.enforce_limits(0.01, &limits, 0.0, 0.0, 0.0, &mut cmd).unwrap();

        let mut cmd = 1.0;
        limiter.enforce_limits(0.01, &limits, 0.0, 0.0, 0.0, &mut cmd).unwrap();
        assert!((cmd - 0.01).abs() < 1e-12);

        // Next cycle steps from the previous command, not from measurement
        let mut cmd = 1.0;
        limiter.enforce_limits(0.01, &limits, 0.0, 0.0, 0.0, &mut cmd).unwrap();
        assert!((cmd - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_hard_position_clamp_applied_last() {
        let limits = hard_only(Some((-0.5, 0.5)), None, None);
        let mut limiter = PositionJointLimiter::new();

        let mut cmd = 2.0;
        limiter.enforce_limits(0.01, &limits, 0.4, 0.0, 0.0, &mut cmd).unwrap();
        assert_eq!(cmd, 0.5);
    }

    #[test]
    fn test_soft_limit_blocks_motion_at_threshold() {
        let limits = with_soft(
            hard_only(Some((-1.0, 1.0)), None, None),
            SoftLimits::new(-0.8, 0.8, 10.0, 5.0),
        );
        let mut limiter = PositionJointLimiter::new();

        // Sitting on the upper soft threshold: no further outward motion
        let mut cmd = 0.9;
        limiter.enforce_limits(0.01, &limits, 0.8, 0.0, 0.0, &mut cmd).unwrap();
        assert!((cmd - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_soft_limit_allows_inward_motion() {
        let limits = with_soft(
            hard_only(Some((-1.0, 1.0)), None, None),
            SoftLimits::new(-0.8, 0.8, 10.0, 5.0),
        );
        let mut limiter = PositionJointLimiter::new();

        let mut cmd = 0.79;
        limiter.enforce_limits(0.01, &limits, 0.8, 0.0, 0.0, &mut cmd).unwrap();
        assert!((cmd - 0.79).abs() < 1e-12);
    }

    #[test]
    fn test_effort_not_checked() {
        let limits = hard_only(None, None, Some((-1.0, 1.0)));
        let mut limiter = PositionJointLimiter::new();

        let mut cmd = 0.2;
        limiter.enforce_limits(0.01, &limits, 0.0, 0.0, 100.0, &mut cmd).unwrap();
        assert_eq!(cmd, 0.2);
    }

    #[test]
    fn test_invalid_range_propagates_without_nan() {
        let limits = hard_only(Some((1.0, -1.0)), None, None);
        let mut limiter = PositionJointLimiter::new();

        let mut cmd = 0.2;
        let result = limiter.enforce_limits(0.01, &limits, 0.0, 0.0, 0.0, &mut cmd);
        assert_eq!(
            result,
            Err(Error::Limit(LimitError::InvalidRange { min: 1.0, max: -1.0 }))
        );
        assert_eq!(cmd, 0.2);
        assert_eq!(limiter.last_command(), None);
    }

    #[test]
    fn test_reset_returns_to_measurement_fallback() {
        let limits = hard_only(None, Some(1.0), None);
        let mut limiter = PositionJointLimiter::new();

        let mut cmd = 0.0;
        limiter.enforce_limits(0.01, &limits, 0.0, 0.0, 0.0, &mut cmd).unwrap();
        limiter.reset();

        let mut cmd = 5.0;
        limiter.enforce_limits(0.01, &limits, 5.0, 0.0, 0.0, &mut cmd).unwrap();
        assert_eq!(cmd, 5.0);
    }

    #[test]
    fn test_rejects_non_positive_period() {
        let limits = hard_only(None, None, None);
        let mut limiter = PositionJointLimiter::new();

        let mut cmd = 0.0;
        assert!(limiter.enforce_limits(0.0, &limits, 0.0, 0.0, 0.0, &mut cmd).is_err());
    }
}
