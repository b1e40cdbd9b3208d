//! Joint module for joint-limits.
//!
//! Binds limits and limiters to named joints for use by a host controller.

mod handle;
mod state;
mod system;

pub use handle::LimitedJointHandle;
pub use state::JointState;
pub use system::JointSystem;
