//! Limiter module for joint-limits.
//!
//! Provides the bound primitives, the per-mode limiters and the [`Limits`]
//! interface they consume once per control cycle.

mod bounds;
mod effort;
mod mode;
mod position;
mod register;
mod velocity;

pub use bounds::{clamp, clamp_checked, project_bounds};
pub use effort::EffortJointLimiter;
pub use mode::{ControlMode, ModeLimiter};
pub use position::PositionJointLimiter;
pub use register::LastCommand;
pub use velocity::VelocityJointLimiter;

use crate::config::SoftLimits;
use crate::error::{LimitError, Result};

/// Read-only view of one joint's configured limits.
///
/// Limiters only rely on these contracts, never on how the limits are stored.
/// [`JointLimits`](crate::config::JointLimits) is the configuration-backed
/// implementation.
pub trait Limits {
    /// Soft limit parameters, if configured.
    fn soft_limits(&self) -> Option<&SoftLimits>;

    /// Hard velocity cap for a cycle of length `period`, if configured.
    fn velocity_limit(&self, period: f64) -> Option<f64>;

    /// Clamp a position into the hard position range.
    ///
    /// # Errors
    ///
    /// Returns [`LimitError::InvalidRange`] if the configured range is inverted.
    fn limit_position(&self, value: f64) -> core::result::Result<f64, LimitError>;

    /// Clamp an effort into the hard effort range.
    ///
    /// # Errors
    ///
    /// Returns [`LimitError::InvalidRange`] if the configured range is inverted.
    fn limit_effort(&self, value: f64) -> core::result::Result<f64, LimitError>;

    /// Suppress a command that would drive the joint further past a hard
    /// position bound it has already reached.
    fn stop_on_position_limit(&self, value: f64, measured_position: f64) -> f64;

    /// Check if soft limits are configured.
    #[inline]
    fn has_soft_limits(&self) -> bool {
        self.soft_limits().is_some()
    }

    /// Soft velocity bounds `(lower, upper)` about a position-like reference.
    ///
    /// Unbounded when no soft limits are configured.
    fn velocity_soft_bounds(&self, reference: f64) -> (f64, f64) {
        match self.soft_limits() {
            Some(soft) => project_bounds(
                reference,
                soft.k_position,
                soft.min_position,
                soft.max_position,
            ),
            None => (f64::NEG_INFINITY, f64::INFINITY),
        }
    }
}

/// A limiter for one joint in one control mode.
///
/// Owns the joint's [`LastCommand`]; the host must not run two cycles for the
/// same limiter concurrently.
pub trait JointLimiter {
    /// Enforce limits on `command` in place for one control cycle.
    ///
    /// On success the emitted command is stored as the last command. On error
    /// `command` still holds the caller's desired value, the last command is
    /// left untouched and the value must not be sent to the actuator.
    ///
    /// # Errors
    ///
    /// Returns [`LimitError`] for a non-positive period, non-finite inputs or an
    /// inverted bound range.
    fn enforce_limits<L: Limits + ?Sized>(
        &mut self,
        period: f64,
        limits: &L,
        position: f64,
        velocity: f64,
        effort: f64,
        command: &mut f64,
    ) -> Result<()>;

    /// Command emitted on the last successful cycle, if any.
    fn last_command(&self) -> Option<f64>;

    /// Forget the last command so the next cycle falls back to measurement.
    fn reset(&mut self);
}

#[inline]
pub(crate) fn check_period(period: f64) -> core::result::Result<f64, LimitError> {
    if period.is_finite() && period > 0.0 {
        Ok(period)
    } else {
        Err(LimitError::InvalidPeriod(period))
    }
}

#[inline]
pub(crate) fn check_finite(value: f64) -> core::result::Result<f64, LimitError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LimitError::NonFinite(value))
    }
}
