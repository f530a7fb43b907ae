//! Error codes and severity levels

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw status value reported for success
pub const STATUS_OK: u8 = 0x00;

/// Kinds of failure shared by every layer of the firmware
///
/// Success is not a variant: operations return `Result<_, ErrorCode>` and
/// the error manager reports "no error" as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum ErrorCode {
    /// Operation timed out
    Timeout = 0x01,
    /// Hardware failure detected
    HardwareFailure = 0x02,
    /// Invalid parameter
    InvalidParameter = 0x03,
    /// Module not initialized
    NotInitialized = 0x04,
    /// Device busy
    Busy = 0x05,
    /// Memory allocation failed
    OutOfMemory = 0x06,
    /// Unknown error
    Unknown = 0xFF,
}

impl ErrorCode {
    /// Get the raw status value
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decode a raw status value
    ///
    /// Returns `None` for [`STATUS_OK`] and for values outside the
    /// taxonomy.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x01 => Some(ErrorCode::Timeout),
            0x02 => Some(ErrorCode::HardwareFailure),
            0x03 => Some(ErrorCode::InvalidParameter),
            0x04 => Some(ErrorCode::NotInitialized),
            0x05 => Some(ErrorCode::Busy),
            0x06 => Some(ErrorCode::OutOfMemory),
            0xFF => Some(ErrorCode::Unknown),
            _ => None,
        }
    }
}

/// Raw status value of an operation result
pub fn status_code(result: Result<(), ErrorCode>) -> u8 {
    match result {
        Ok(()) => STATUS_OK,
        Err(code) => code.as_u8(),
    }
}

/// How serious an error is
///
/// Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Severity {
    /// Informational message
    #[default]
    Info = 0,
    /// Warning condition
    Warn = 1,
    /// Error condition
    Error = 2,
    /// Fatal error - system may need reset
    Fatal = 3,
}

impl Severity {
    /// Check if this severity halts forward progress
    pub fn is_fatal(self) -> bool {
        self == Severity::Fatal
    }
}
