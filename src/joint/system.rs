//! Joint system facade for multi-joint configuration.
//!
//! Provides a high-level API for managing the limited joints of one controller.

use heapless::{FnvIndexMap, String};

use crate::config::{JointConfig, SystemConfig, MAX_JOINTS};
use crate::error::{ConfigError, Error, Result};

use super::handle::LimitedJointHandle;
use super::state::JointState;

/// A facade owning one [`LimitedJointHandle`] per configured joint.
///
/// # Example
///
/// ```rust,ignore
/// use joint_limits::{JointState, JointSystem};
///
/// let config = joint_limits::load_config("joints.toml")?;
/// let mut system = JointSystem::from_config(&config)?;
///
/// // Every control cycle
/// let mut cmd = desired;
/// system.enforce("shoulder", 0.001, &JointState::new(pos, vel, eff), &mut cmd)?;
/// ```
#[derive(Debug, Default)]
pub struct JointSystem {
    joints: FnvIndexMap<String<32>, LimitedJointHandle, MAX_JOINTS>,
}

impl JointSystem {
    /// Create an empty system.
    pub fn new() -> Self {
        Self {
            joints: FnvIndexMap::new(),
        }
    }

    /// Create a handle for every joint in the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration holds more joints than fit.
    pub fn from_config(config: &SystemConfig) -> Result<Self> {
        let mut system = Self::new();
        for (name, joint) in config.joints.iter() {
            system.register(name.as_str(), joint)?;
        }
        Ok(system)
    }

    /// Register a joint.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is too long or already taken, the limits
    /// fail validation, or the system is full.
    pub fn register(&mut self, name: &str, config: &JointConfig) -> Result<()> {
        let key = joint_name(name)?;

        if self.joints.contains_key(&key) {
            return Err(Error::Config(ConfigError::DuplicateJointName(key)));
        }

        let handle = LimitedJointHandle::from_config(key.clone(), config)?;
        self.joints
            .insert(key, handle)
            .map_err(|_| Error::Config(ConfigError::TooManyJoints))?;

        Ok(())
    }

    /// Get a joint handle by name.
    pub fn joint(&self, name: &str) -> Option<&LimitedJointHandle> {
        let key = String::try_from(name).ok()?;
        self.joints.get(&key)
    }

    /// Get a mutable joint handle by name.
    pub fn joint_mut(&mut self, name: &str) -> Option<&mut LimitedJointHandle> {
        let key = String::try_from(name).ok()?;
        self.joints.get_mut(&key)
    }

    /// Enforce limits on one joint's command.
    ///
    /// # Errors
    ///
    /// Returns an error if the joint is unknown or enforcement fails.
    pub fn enforce(
        &mut self,
        name: &str,
        period: f64,
        state: &JointState,
        command: &mut f64,
    ) -> Result<()> {
        let handle = match self.joint_mut(name) {
            Some(handle) => handle,
            None => return Err(Error::Config(ConfigError::JointNotFound(truncated(name)))),
        };
        handle.enforce(period, state, command)
    }

    /// Reset every joint's last command.
    pub fn reset_all(&mut self) {
        for (_, handle) in self.joints.iter_mut() {
            handle.reset();
        }
    }

    /// List all joint names.
    pub fn joint_names(&self) -> impl Iterator<Item = &str> {
        self.joints.keys().map(|s| s.as_str())
    }

    /// Get the number of joints.
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    /// Check if the system has no joints.
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }
}

fn joint_name(name: &str) -> Result<String<32>> {
    String::try_from(name).map_err(|_| Error::Config(ConfigError::JointNameTooLong(truncated(name))))
}

fn truncated(name: &str) -> String<32> {
    let mut out = String::new();
    for c in name.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
