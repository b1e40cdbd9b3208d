//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{JointLimits, SystemConfig};

/// Validate a system configuration.
///
/// Checks, for every joint:
/// - Hard position and effort ranges are finite with min <= max
/// - Max velocity is > 0
/// - Soft thresholds are ordered, gains are non-negative
/// - Soft thresholds lie inside the hard position range, when both exist
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (_name, joint) in config.joints.iter() {
        validate_limits(&joint.limits)?;
    }

    Ok(())
}

/// Validate one joint's limits.
pub fn validate_limits(limits: &JointLimits) -> Result<()> {
    if let Some(ref range) = limits.position {
        if !range.is_valid() {
            return Err(Error::Config(ConfigError::InvalidRange {
                quantity: "position",
                min: range.min,
                max: range.max,
            }));
        }
    }

    if let Some(ref range) = limits.effort {
        if !range.is_valid() {
            return Err(Error::Config(ConfigError::InvalidRange {
                quantity: "effort",
                min: range.min,
                max: range.max,
            }));
        }
    }

    if let Some(max_velocity) = limits.velocity {
        // NaN fails this comparison too
        if !(max_velocity > 0.0 && max_velocity.is_finite()) {
            return Err(Error::Config(ConfigError::InvalidMaxVelocity(max_velocity)));
        }
    }

    if let Some(ref soft) = limits.soft {
        if soft.k_position < 0.0 || !soft.k_position.is_finite() {
            return Err(Error::Config(ConfigError::InvalidGain(soft.k_position)));
        }
        if soft.k_velocity < 0.0 || !soft.k_velocity.is_finite() {
            return Err(Error::Config(ConfigError::InvalidGain(soft.k_velocity)));
        }

        let inside_hard = limits.position.map_or(true, |range| {
            range.contains(soft.min_position) && range.contains(soft.max_position)
        });

        if !soft.is_valid() || !inside_hard {
            return Err(Error::Config(ConfigError::InvalidSoftLimits {
                min: soft.min_position,
                max: soft.max_position,
            }));
        }
    }

    Ok(())
}
