//! Dimension-free bound primitives.
//!
//! These operate on plain `f64` values; the mode limiters decide whether a
//! value is a position, a velocity or an effort.

use crate::error::LimitError;

/// Clamp `value` into `[min, max]`, reporting whether clamping occurred.
///
/// An inverted range (`min > max`) is a configuration error: it is reported on
/// the diagnostic channel and the result is the NaN sentinel with
/// `was_clamped = false`. Callers on the enforcement path must not forward this
/// result; use [`clamp`] there, which turns the sentinel into a typed error.
#[inline]
pub fn clamp_checked(value: f64, min: f64, max: f64) -> (f64, bool) {
    if min > max {
        #[cfg(feature = "defmt")]
        defmt::error!("inverted bound range: min {} > max {}", min, max);
        return (f64::NAN, false);
    }

    if value > max {
        (max, true)
    } else if value < min {
        (min, true)
    } else {
        (value, false)
    }
}

/// Clamp `value` into `[min, max]`, discarding the clamped flag.
///
/// # Errors
///
/// Returns [`LimitError::InvalidRange`] instead of a NaN when `min > max`.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> Result<f64, LimitError> {
    let (result, _) = clamp_checked(value, min, max);
    if min > max {
        return Err(LimitError::InvalidRange { min, max });
    }
    Ok(result)
}

/// Compute the linear repulsion bounds `(lower, upper)` for `value`.
///
/// `lower = -k * (value - lower_threshold)`, `upper = -k * (value - upper_threshold)`.
/// Each bound reaches zero exactly at its threshold, so a quantity derived from
/// them decays linearly to zero while approaching the soft limit.
#[inline]
pub fn project_bounds(value: f64, k: f64, lower_threshold: f64, upper_threshold: f64) -> (f64, f64) {
    (-k * (value - lower_threshold), -k * (value - upper_threshold))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_checked_in_range() {
        assert_eq!(clamp_checked(0.5, -1.0, 1.0), (0.5, false));
        assert_eq!(clamp_checked(1.0, -1.0, 1.0), (1.0, false));
        assert_eq!(clamp_checked(-1.0, -1.0, 1.0), (-1.0, false));
    }

    #[test]
    fn test_clamp_checked_out_of_range() {
        assert_eq!(clamp_checked(3.0, -1.0, 1.0), (1.0, true));
        assert_eq!(clamp_checked(-3.0, -1.0, 1.0), (-1.0, true));
    }

    #[test]
    fn test_clamp_checked_inverted_range() {
        let (result, clamped) = clamp_checked(0.0, 1.0, -1.0);
        assert!(result.is_nan());
        assert!(!clamped);
    }

    #[test]
    fn test_clamp_degenerate_range() {
        assert_eq!(clamp(5.0, 2.0, 2.0), Ok(2.0));
    }

    #[test]
    fn test_clamp_inverted_range_is_error() {
        assert_eq!(
            clamp(0.0, 1.0, -1.0),
            Err(LimitError::InvalidRange { min: 1.0, max: -1.0 })
        );
    }

    #[test]
    fn test_project_bounds_zero_at_thresholds() {
        let (lower, _) = project_bounds(-1.0, 10.0, -1.0, 1.0);
        assert_eq!(lower, 0.0);
        let (_, upper) = project_bounds(1.0, 10.0, -1.0, 1.0);
        assert_eq!(upper, 0.0);
    }

    #[test]
    fn test_project_bounds_midpoint() {
        // Centered between thresholds: motion allowed in both directions
        let (lower, upper) = project_bounds(0.0, 2.0, -1.0, 1.0);
        assert_eq!(lower, -2.0);
        assert_eq!(upper, 2.0);
    }
}
