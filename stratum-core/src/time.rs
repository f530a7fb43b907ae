//! Timestamp source for error records

/// Monotonic millisecond clock used to stamp error records
///
/// The value is allowed to wrap; it is only used for ordering and
/// diagnostics, never for scheduling.
pub type TimeSource = fn() -> u32;

/// Time source for builds without a system tick
///
/// Every record is stamped with 0.
pub fn no_time_source() -> u32 {
    0
}
