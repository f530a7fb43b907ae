//! Application state machine
//!
//! ```text
//!            init ok              fatal in health check
//!   INIT ─────────────▶ RUNNING ───────────────────────▶ ERROR
//!     │                    │ ▲                              │
//!     │ init failure       │ └── run_cycle (heartbeat)      │
//!     └────────────────────┼──────────────▶ ERROR           │
//!                          │ stop                           │ stop
//!                          ▼                                ▼
//!                       SHUTDOWN ◀──────────────────────────┘
//! ```
//!
//! SHUTDOWN is terminal. Only a fatal error halts forward progress; every
//! other severity is observed and the machine keeps running.

use super::subsystem::{Heartbeat, Subsystem};
use crate::config::AppConfig;
use crate::error::{ErrorCode, ErrorManager, Severity};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Application states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AppState {
    /// Power-on, init sequence not yet completed
    #[default]
    Init,
    /// All subsystems up, cycling
    Running,
    /// Fatal condition observed; cycling halted
    Error,
    /// Stopped on request; terminal
    Shutdown,
}

impl AppState {
    /// Check if this is the error state
    pub fn is_error(&self) -> bool {
        matches!(self, AppState::Error)
    }

    /// Check if no operation can leave this state
    pub fn is_terminal(&self) -> bool {
        matches!(self, AppState::Shutdown)
    }
}

/// Application state machine
///
/// Owns the current [`AppState`] and the heartbeat counter. The error
/// manager is passed in by the caller on every operation that needs it.
#[derive(Debug, Clone)]
pub struct Application {
    /// Current state
    state: AppState,
    /// RUNNING cycles completed (wrapping)
    heartbeat_counter: u32,
    /// Toggle the heartbeat every this many cycles
    heartbeat_period: u32,
}

impl Default for Application {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl Application {
    /// Create an application in the INIT state
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: AppState::Init,
            heartbeat_counter: 0,
            heartbeat_period: config.heartbeat_period.max(1),
        }
    }

    /// Run the init sequence
    ///
    /// Resets the error manager, then initializes `subsystems` in slice
    /// order. The first failure is logged at fatal severity with the
    /// subsystem's position as context, moves the machine to ERROR, and
    /// aborts the sequence; later subsystems are not touched.
    ///
    /// Not available once shut down.
    pub fn init(
        &mut self,
        errors: &mut ErrorManager,
        subsystems: &mut [&mut dyn Subsystem],
    ) -> Result<(), ErrorCode> {
        if self.state.is_terminal() {
            return Err(ErrorCode::NotInitialized);
        }

        errors.init();
        self.state = AppState::Init;
        self.heartbeat_counter = 0;

        for (position, subsystem) in subsystems.iter_mut().enumerate() {
            if let Err(code) = subsystem.init(errors) {
                errors.log(code, Severity::Fatal, position as u32);
                self.state = AppState::Error;
                return Err(code);
            }
        }

        self.state = AppState::Running;
        Ok(())
    }

    /// Confirm the application is ready to cycle
    pub fn start(&self) -> Result<(), ErrorCode> {
        if self.state != AppState::Running {
            return Err(ErrorCode::NotInitialized);
        }
        Ok(())
    }

    /// Request shutdown
    ///
    /// Valid from every state. Cleanup of hardware is the caller's job.
    pub fn stop(&mut self) -> Result<(), ErrorCode> {
        self.state = AppState::Shutdown;
        Ok(())
    }

    /// Run one cooperative cycle
    ///
    /// Counts the cycle, toggles the heartbeat every `heartbeat_period`
    /// cycles, then runs the health check. Outside RUNNING nothing is
    /// changed and `NotInitialized` is returned.
    pub fn run_cycle(
        &mut self,
        errors: &ErrorManager,
        heartbeat: &mut dyn Heartbeat,
    ) -> Result<(), ErrorCode> {
        if self.state != AppState::Running {
            return Err(ErrorCode::NotInitialized);
        }

        self.heartbeat_counter = self.heartbeat_counter.wrapping_add(1);
        if self.heartbeat_counter % self.heartbeat_period == 0 {
            heartbeat.toggle();
        }

        self.health_check(errors)
    }

    /// Inspect the most recent error
    ///
    /// A fatal most-recent error moves the machine to ERROR (unless it is
    /// already shut down) and is returned. Anything less severe passes.
    pub fn health_check(&mut self, errors: &ErrorManager) -> Result<(), ErrorCode> {
        let Some(code) = errors.get_last() else {
            return Ok(());
        };

        if errors.get_last_severity().is_fatal() {
            if !self.state.is_terminal() {
                self.state = AppState::Error;
            }
            return Err(code);
        }

        Ok(())
    }

    /// Get current state
    pub fn get_state(&self) -> AppState {
        self.state
    }

    /// Get number of RUNNING cycles since init (wrapping)
    pub fn heartbeat_counter(&self) -> u32 {
        self.heartbeat_counter
    }
}
