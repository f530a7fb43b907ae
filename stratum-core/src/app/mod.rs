//! Application layer
//!
//! Owns process lifetime: runs the ordered subsystem init sequence,
//! drives the periodic heartbeat, and consults the error manager once per
//! cycle to decide between RUNNING and ERROR.

pub mod machine;
pub mod subsystem;
pub mod system;

pub use machine::{AppState, Application};
pub use subsystem::{Heartbeat, Subsystem};
pub use system::{BootError, System};
