//! Joint configuration from TOML.

use serde::Deserialize;

use super::limits::JointLimits;
use crate::limiter::ControlMode;

/// Complete joint configuration from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JointConfig {
    /// Control mode the joint is commanded in.
    #[serde(default)]
    pub mode: ControlMode,

    /// Hard and soft limits.
    #[serde(default)]
    pub limits: JointLimits,
}

impl JointConfig {
    /// Create a joint configuration.
    pub fn new(mode: ControlMode, limits: JointLimits) -> Self {
        Self { mode, limits }
    }
}
