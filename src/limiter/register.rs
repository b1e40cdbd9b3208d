//! Last accepted command, retained between control cycles.

/// Previous cycle's emitted command for one joint in one control mode.
///
/// Starts unset so the first cycle can fall back to a measurement instead of
/// treating `0.0` as a previous command.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LastCommand(Option<f64>);

impl LastCommand {
    /// Create an unset register.
    #[inline]
    pub const fn new() -> Self {
        Self(None)
    }

    /// Get the stored command, if any.
    #[inline]
    pub fn get(&self) -> Option<f64> {
        self.0
    }

    /// Get the stored command or `fallback` when unset.
    #[inline]
    pub fn get_or(&self, fallback: f64) -> f64 {
        self.0.unwrap_or(fallback)
    }

    /// Store the command emitted this cycle.
    #[inline]
    pub fn set(&mut self, command: f64) {
        self.0 = Some(command);
    }

    /// Return to the unset state.
    #[inline]
    pub fn reset(&mut self) {
        self.0 = None;
    }

    /// Check if a command has been stored.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}
