//! Board-agnostic core logic for the Stratum firmware
//!
//! This crate contains the parts of the firmware that carry real
//! invariants and do not depend on any hardware:
//!
//! - Error taxonomy and severity levels
//! - Error manager (fixed-capacity ring buffer of error records)
//! - Application state machine with heartbeat and health check
//! - System context tying both together for the main loop
//! - Application configuration
//!
//! Everything here is single-threaded and cooperative. Callers serialize
//! access; nothing is guarded against reentrancy.

#![no_std]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod error;
pub mod time;

pub use app::{AppState, Application, BootError, Heartbeat, Subsystem, System};
pub use config::{AppConfig, ConfigError};
pub use error::{status_code, ErrorCode, ErrorManager, ErrorRecord, Severity, ERROR_LOG_SIZE};
pub use time::{no_time_source, TimeSource};
