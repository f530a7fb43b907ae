//! Collaborator traits consumed by the application
//!
//! The application does not know about clocks, pins or UARTs. It only
//! needs an ordered list of things to initialize and one output to toggle
//! as a liveness indicator.

use crate::error::{ErrorCode, ErrorManager};

/// A unit of the init sequence (BSP, GPIO driver, UART driver, ...)
pub trait Subsystem {
    /// Short name for diagnostics
    fn name(&self) -> &'static str;

    /// Bring the subsystem up
    ///
    /// Implementations may log their own details to `errors`; the
    /// application logs the returned failure again at fatal severity.
    fn init(&mut self, errors: &mut ErrorManager) -> Result<(), ErrorCode>;
}

/// Periodic liveness output
///
/// Toggling is fire-and-forget: the application ignores whether it
/// worked.
pub trait Heartbeat {
    /// Flip the liveness signal
    fn toggle(&mut self);
}
