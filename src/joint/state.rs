//! Measured joint state for one control cycle.

/// Position, velocity and effort measured at the start of a cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JointState {
    /// Measured position.
    pub position: f64,
    /// Measured velocity.
    pub velocity: f64,
    /// Measured effort.
    pub effort: f64,
}

impl JointState {
    /// Create a joint state from measurements.
    #[inline]
    pub const fn new(position: f64, velocity: f64, effort: f64) -> Self {
        Self {
            position,
            velocity,
            effort,
        }
    }

    /// Joint at rest at `position`.
    #[inline]
    pub const fn at_rest(position: f64) -> Self {
        Self::new(position, 0.0, 0.0)
    }
}
