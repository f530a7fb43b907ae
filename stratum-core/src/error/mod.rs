//! Centralized error handling
//!
//! Error codes, severity levels, and the error manager. Every failure in
//! the firmware is expressed as an [`ErrorCode`]; the [`ErrorManager`]
//! keeps the most recent occurrences so the application can decide
//! whether to keep running.

pub mod code;
pub mod manager;

pub use code::{status_code, ErrorCode, Severity, STATUS_OK};
pub use manager::{ErrorManager, ErrorRecord, ERROR_LOG_SIZE};
