//! Joint limit configuration and types.

use serde::Deserialize;

use crate::error::LimitError;
use crate::limiter::{clamp, Limits};

/// Closed interval `[min, max]` for a hard limit.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Range {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Range {
    /// Create a new range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if the range is valid (min <= max, both finite).
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    /// Check if a value lies within the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value into the range.
    ///
    /// # Errors
    ///
    /// Returns [`LimitError::InvalidRange`] if `min > max`.
    #[inline]
    pub fn clamp(&self, value: f64) -> Result<f64, LimitError> {
        clamp(value, self.min, self.max)
    }
}

/// Soft position limits with the braking gains derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SoftLimits {
    /// Lower soft position threshold.
    pub min_position: f64,

    /// Upper soft position threshold.
    pub max_position: f64,

    /// Gain turning a position margin into a velocity bound.
    pub k_position: f64,

    /// Gain turning a velocity margin into an effort bound.
    pub k_velocity: f64,
}

impl SoftLimits {
    /// Create new soft limits.
    pub const fn new(min_position: f64, max_position: f64, k_position: f64, k_velocity: f64) -> Self {
        Self {
            min_position,
            max_position,
            k_position,
            k_velocity,
        }
    }

    /// Check if the thresholds are ordered and the gains are non-negative.
    pub fn is_valid(&self) -> bool {
        self.min_position.is_finite()
            && self.max_position.is_finite()
            && self.min_position <= self.max_position
            && self.k_position.is_finite()
            && self.k_position >= 0.0
            && self.k_velocity.is_finite()
            && self.k_velocity >= 0.0
    }
}

/// Hard and soft limits for one joint (from configuration).
///
/// Every limit is optional; an absent limit imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JointLimits {
    /// Hard position range.
    #[serde(default)]
    pub position: Option<Range>,

    /// Hard symmetric velocity cap.
    #[serde(default, rename = "max_velocity")]
    pub velocity: Option<f64>,

    /// Hard effort range.
    #[serde(default)]
    pub effort: Option<Range>,

    /// Soft limits.
    #[serde(default)]
    pub soft: Option<SoftLimits>,
}

impl JointLimits {
    /// Create limits with no constraints.
    pub const fn unbounded() -> Self {
        Self {
            position: None,
            velocity: None,
            effort: None,
            soft: None,
        }
    }

    /// Set the hard position range.
    pub fn with_position(mut self, min: f64, max: f64) -> Self {
        self.position = Some(Range::new(min, max));
        self
    }

    /// Set the hard velocity cap.
    pub fn with_max_velocity(mut self, max_velocity: f64) -> Self {
        self.velocity = Some(max_velocity);
        self
    }

    /// Set the hard effort range.
    pub fn with_effort(mut self, min: f64, max: f64) -> Self {
        self.effort = Some(Range::new(min, max));
        self
    }

    /// Set the soft limits.
    pub fn with_soft_limits(mut self, soft: SoftLimits) -> Self {
        self.soft = Some(soft);
        self
    }
}

impl Limits for JointLimits {
    #[inline]
    fn soft_limits(&self) -> Option<&SoftLimits> {
        self.soft.as_ref()
    }

    #[inline]
    fn velocity_limit(&self, _period: f64) -> Option<f64> {
        self.velocity
    }

    fn limit_position(&self, value: f64) -> Result<f64, LimitError> {
        match &self.position {
            Some(range) => range.clamp(value),
            None => Ok(value),
        }
    }

    fn limit_effort(&self, value: f64) -> Result<f64, LimitError> {
        match &self.effort {
            Some(range) => range.clamp(value),
            None => Ok(value),
        }
    }

    fn stop_on_position_limit(&self, value: f64, measured_position: f64) -> f64 {
        let Some(range) = &self.position else {
            return value;
        };

        let outward = (measured_position >= range.max && value > 0.0)
            || (measured_position <= range.min && value < 0.0);

        if outward {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "position {} at hard limit [{}, {}], stopping command {}",
                measured_position,
                range.min,
                range.max,
                value
            );
            0.0
        } else {
            value
        }
    }
}
