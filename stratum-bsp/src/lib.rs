//! Board support package
//!
//! Board wiring constants, the clock tree, and the BSP step of the
//! application init sequence. Nothing here touches peripherals directly;
//! the clock tree is applied through a [`ClockControl`] implementation
//! supplied by the chip layer.

#![no_std]
#![deny(unsafe_code)]

pub mod board;
pub mod clock;

pub use clock::{BoardClocks, ClockConfig, ClockControl};

use stratum_core::{ErrorCode, ErrorManager, Severity, Subsystem};

/// Context logged when clock bring-up fails
pub const CLOCK_INIT_CONTEXT: u32 = 0;

/// BSP init step
///
/// Brings up the clock tree. A failure is logged here at fatal severity
/// before being returned to the application, which logs it again with
/// the BSP's position in the init sequence.
pub struct Bsp<C> {
    clocks: C,
    config: ClockConfig,
    initialized: bool,
}

impl Bsp<BoardClocks> {
    /// BSP for the default board clock tree
    pub fn new() -> Self {
        Self::with_clocks(BoardClocks)
    }
}

impl Default for Bsp<BoardClocks> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ClockControl> Bsp<C> {
    /// BSP applying the board clock tree through `clocks`
    pub fn with_clocks(clocks: C) -> Self {
        Self {
            clocks,
            config: ClockConfig::board_default(),
            initialized: false,
        }
    }

    /// Board clock tree
    pub fn clock_config(&self) -> &ClockConfig {
        &self.config
    }

    /// Check if clock bring-up succeeded
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Power-down counterpart of init
    pub fn deinit(&mut self) -> Result<(), ErrorCode> {
        self.initialized = false;
        Ok(())
    }
}

impl<C: ClockControl> Subsystem for Bsp<C> {
    fn name(&self) -> &'static str {
        "bsp"
    }

    fn init(&mut self, errors: &mut ErrorManager) -> Result<(), ErrorCode> {
        let result = self.clocks.configure(&self.config);
        errors.record(result, Severity::Fatal, CLOCK_INIT_CONTEXT)?;
        self.initialized = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingClocks;

    impl ClockControl for FailingClocks {
        fn configure(&mut self, _config: &ClockConfig) -> Result<(), ErrorCode> {
            Err(ErrorCode::HardwareFailure)
        }
    }

    #[test]
    fn test_init_ok() {
        let mut errors = ErrorManager::new();
        let mut bsp = Bsp::new();
        assert_eq!(bsp.init(&mut errors), Ok(()));
        assert!(bsp.is_initialized());
        assert_eq!(errors.get_count(), 0);
        assert_eq!(bsp.name(), "bsp");

        assert_eq!(bsp.deinit(), Ok(()));
        assert!(!bsp.is_initialized());
    }

    #[test]
    fn test_clock_failure_logged_fatal() {
        let mut errors = ErrorManager::new();
        let mut bsp = Bsp::with_clocks(FailingClocks);

        assert_eq!(bsp.init(&mut errors), Err(ErrorCode::HardwareFailure));
        assert!(!bsp.is_initialized());

        let record = errors.last_record().unwrap();
        assert_eq!(record.code, ErrorCode::HardwareFailure);
        assert_eq!(record.severity, Severity::Fatal);
        assert_eq!(record.context, CLOCK_INIT_CONTEXT);
    }

    #[test]
    fn test_failure_logged_twice_through_application() {
        use stratum_core::{AppState, Application};

        let mut errors = ErrorManager::new();
        let mut app = Application::default();
        let mut bsp = Bsp::with_clocks(FailingClocks);

        assert_eq!(
            app.init(&mut errors, &mut [&mut bsp]),
            Err(ErrorCode::HardwareFailure)
        );
        assert_eq!(app.get_state(), AppState::Error);
        // Once by the BSP, once by the application (position 0)
        assert_eq!(errors.get_count(), 2);
        assert!(errors
            .records()
            .all(|r| r.severity == Severity::Fatal && r.context == 0));
    }
}
