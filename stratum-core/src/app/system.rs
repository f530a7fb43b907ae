//! System context
//!
//! Bundles the error manager and the application so the top-level run
//! loop owns all mutable state explicitly. Implements the main loop
//! policy:
//!
//! - A failed init is a fail-stop condition; the caller must idle until
//!   an external reset.
//! - A refused start stops the application.
//! - A failed cycle is logged at warning severity and the loop goes on
//!   for as long as the application stays RUNNING.

use super::machine::{AppState, Application};
use super::subsystem::{Heartbeat, Subsystem};
use crate::config::{AppConfig, ConfigError};
use crate::error::{ErrorCode, ErrorManager, Severity};
use crate::time::TimeSource;

/// Why the system did not reach the RUNNING loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootError {
    /// Configuration rejected before any subsystem was touched
    Config(ConfigError),
    /// A subsystem failed to initialize (unrecoverable)
    Init(ErrorCode),
    /// The application refused to start; it has been stopped
    Start(ErrorCode),
}

/// Top-level context owned by the run loop
pub struct System {
    errors: ErrorManager,
    app: Application,
    config: AppConfig,
}

impl System {
    /// Create a system whose error records carry no timestamp
    pub fn new(config: AppConfig) -> Self {
        Self::from_parts(ErrorManager::new(), config)
    }

    /// Create a system stamping error records from `clock`
    pub fn with_time_source(config: AppConfig, clock: TimeSource) -> Self {
        Self::from_parts(ErrorManager::with_time_source(clock), config)
    }

    fn from_parts(errors: ErrorManager, config: AppConfig) -> Self {
        Self {
            errors,
            app: Application::new(&config),
            config,
        }
    }

    /// Initialize every subsystem in order and start the application
    pub fn boot(&mut self, subsystems: &mut [&mut dyn Subsystem]) -> Result<(), BootError> {
        self.config.validate().map_err(BootError::Config)?;

        self.app
            .init(&mut self.errors, subsystems)
            .map_err(BootError::Init)?;

        if let Err(code) = self.app.start() {
            let _ = self.app.stop();
            return Err(BootError::Start(code));
        }

        Ok(())
    }

    /// Run one main loop iteration
    ///
    /// Returns `true` while the application is still RUNNING. The caller
    /// waits `cycle_delay_ms` between iterations.
    pub fn step(&mut self, heartbeat: &mut dyn Heartbeat) -> bool {
        if let Err(code) = self.app.run_cycle(&self.errors, heartbeat) {
            self.errors.log(code, Severity::Warn, 0);
        }
        self.is_running()
    }

    /// Stop the application; terminal
    pub fn shutdown(&mut self) {
        let _ = self.app.stop();
    }

    /// Check if the application is cycling
    pub fn is_running(&self) -> bool {
        self.app.get_state() == AppState::Running
    }

    /// Get current application state
    pub fn state(&self) -> AppState {
        self.app.get_state()
    }

    /// Delay between main loop iterations (ms)
    pub fn cycle_delay_ms(&self) -> u32 {
        self.config.cycle_delay_ms
    }

    /// Error log
    pub fn errors(&self) -> &ErrorManager {
        &self.errors
    }

    /// Error log, for collaborators that report failures
    pub fn errors_mut(&mut self) -> &mut ErrorManager {
        &mut self.errors
    }

    /// Application state machine
    pub fn app(&self) -> &Application {
        &self.app
    }
}
