//! Error manager
//!
//! Records error occurrences in a fixed-capacity ring buffer. Logging
//! never fails.
//!
//! Two counters are kept apart: the buffer always knows which
//! record was written last, while `count` tracks how many records are
//! still logically present. [`ErrorManager::clear_last`] only lowers the
//! logical count; it does not change what [`ErrorManager::get_last`]
//! reports until a new record is written.

use heapless::HistoryBuffer;

use super::code::{ErrorCode, Severity};
use crate::time::{no_time_source, TimeSource};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of records retained by the error manager
pub const ERROR_LOG_SIZE: usize = 32;

/// A single logged error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ErrorRecord {
    /// What went wrong
    pub code: ErrorCode,
    /// How serious it is
    pub severity: Severity,
    /// Caller-defined context (init position, source line, ...)
    pub context: u32,
    /// Time source reading when the record was written (ms)
    pub timestamp: u32,
}

/// Central error log
///
/// Owned by the top-level system context and passed by reference to
/// everything that reports or inspects errors.
pub struct ErrorManager {
    /// Ring buffer of the most recent records
    history: HistoryBuffer<ErrorRecord, ERROR_LOG_SIZE>,
    /// Records logically present (saturates at capacity)
    count: u32,
    /// Total `log` calls since the last init (wrapping)
    total_logged: u32,
    /// Clock used to stamp records
    clock: TimeSource,
}

impl Default for ErrorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorManager {
    /// Create an empty error manager without a time source
    pub fn new() -> Self {
        Self::with_time_source(no_time_source)
    }

    /// Create an empty error manager stamping records from `clock`
    pub fn with_time_source(clock: TimeSource) -> Self {
        Self {
            history: HistoryBuffer::new(),
            count: 0,
            total_logged: 0,
            clock,
        }
    }

    /// Reset the log
    ///
    /// Discards every prior record. Calling it again at any time is a
    /// valid full reset.
    pub fn init(&mut self) {
        self.history = HistoryBuffer::new();
        self.count = 0;
        self.total_logged = 0;
    }

    /// Record an error occurrence
    ///
    /// Once the buffer is full the oldest record is overwritten and the
    /// count stays at capacity.
    pub fn log(&mut self, code: ErrorCode, severity: Severity, context: u32) {
        self.history.write(ErrorRecord {
            code,
            severity,
            context,
            timestamp: (self.clock)(),
        });
        self.total_logged = self.total_logged.wrapping_add(1);
        if self.count < ERROR_LOG_SIZE as u32 {
            self.count += 1;
        }
    }

    /// Log the error of a failed result and pass the result through
    ///
    /// Successful results are returned untouched and nothing is logged.
    pub fn record<V>(
        &mut self,
        result: Result<V, ErrorCode>,
        severity: Severity,
        context: u32,
    ) -> Result<V, ErrorCode> {
        if let Err(code) = result {
            self.log(code, severity, context);
        }
        result
    }

    /// Most recently logged error code, or `None` if nothing is logged
    pub fn get_last(&self) -> Option<ErrorCode> {
        self.last_record().map(|r| r.code)
    }

    /// Severity of the most recently logged error
    ///
    /// Returns [`Severity::Info`] if nothing is logged.
    pub fn get_last_severity(&self) -> Severity {
        self.last_record()
            .map(|r| r.severity)
            .unwrap_or(Severity::Info)
    }

    /// Most recently logged record, or `None` if nothing is logged
    pub fn last_record(&self) -> Option<ErrorRecord> {
        if self.count == 0 {
            return None;
        }
        self.history.recent().copied()
    }

    /// Number of records logically present (at most [`ERROR_LOG_SIZE`])
    pub fn get_count(&self) -> u32 {
        self.count
    }

    /// Mark one fewer record as logically present
    ///
    /// Does not erase anything: [`ErrorManager::get_last`] keeps reporting
    /// the same record while the count is non-zero.
    pub fn clear_last(&mut self) {
        if self.count > 0 {
            self.count -= 1;
        }
    }

    /// Total number of `log` calls since the last init (wrapping)
    pub fn total_logged(&self) -> u32 {
        self.total_logged
    }

    /// Retained records, oldest first
    ///
    /// Includes every record still held by the buffer, regardless of
    /// [`ErrorManager::clear_last`].
    pub fn records(&self) -> impl Iterator<Item = &ErrorRecord> + '_ {
        self.history.oldest_ordered()
    }
}
