//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::joint::JointConfig;

/// Maximum number of joints in one configuration.
pub const MAX_JOINTS: usize = 16;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemConfig {
    /// Named joint configurations.
    #[serde(default)]
    pub joints: FnvIndexMap<String<32>, JointConfig, MAX_JOINTS>,
}

impl SystemConfig {
    /// Get a joint configuration by name.
    pub fn joint(&self, name: &str) -> Option<&JointConfig> {
        self.joints
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all joint names.
    pub fn joint_names(&self) -> impl Iterator<Item = &str> {
        self.joints.keys().map(|s| s.as_str())
    }
}
