//! Ring buffer properties of the error manager

use proptest::prelude::*;
use stratum_core::{ErrorCode, ErrorManager, Severity, ERROR_LOG_SIZE};

fn error_code() -> impl Strategy<Value = ErrorCode> {
    prop_oneof![
        Just(ErrorCode::Timeout),
        Just(ErrorCode::HardwareFailure),
        Just(ErrorCode::InvalidParameter),
        Just(ErrorCode::NotInitialized),
        Just(ErrorCode::Busy),
        Just(ErrorCode::OutOfMemory),
        Just(ErrorCode::Unknown),
    ]
}

fn severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Info),
        Just(Severity::Warn),
        Just(Severity::Error),
        Just(Severity::Fatal),
    ]
}

fn entries() -> impl Strategy<Value = Vec<(ErrorCode, Severity, u32)>> {
    prop::collection::vec((error_code(), severity(), any::<u32>()), 1..100)
}

proptest! {
    #[test]
    fn count_is_min_of_logged_and_capacity(log in entries()) {
        let mut errors = ErrorManager::new();
        for (i, &(code, severity, context)) in log.iter().enumerate() {
            errors.log(code, severity, context);
            let expected = (i + 1).min(ERROR_LOG_SIZE) as u32;
            prop_assert_eq!(errors.get_count(), expected);
        }
    }

    #[test]
    fn last_reports_most_recent(log in entries()) {
        let mut errors = ErrorManager::new();
        for &(code, severity, context) in &log {
            errors.log(code, severity, context);
            prop_assert_eq!(errors.get_last(), Some(code));
            prop_assert_eq!(errors.get_last_severity(), severity);
        }
    }

    #[test]
    fn clear_last_only_lowers_count(log in entries(), clears in 0usize..40) {
        let mut errors = ErrorManager::new();
        for &(code, severity, context) in &log {
            errors.log(code, severity, context);
        }
        let (last_code, last_severity, _) = *log.last().unwrap();

        for _ in 0..clears {
            let before = errors.get_count();
            errors.clear_last();
            prop_assert_eq!(errors.get_count(), before.saturating_sub(1));
            if errors.get_count() > 0 {
                prop_assert_eq!(errors.get_last(), Some(last_code));
                prop_assert_eq!(errors.get_last_severity(), last_severity);
            }
        }
    }

    #[test]
    fn retained_records_are_the_newest(log in entries()) {
        let mut errors = ErrorManager::new();
        for &(code, severity, context) in &log {
            errors.log(code, severity, context);
        }

        let skip = log.len().saturating_sub(ERROR_LOG_SIZE);
        let expected: Vec<_> = log[skip..].to_vec();
        let retained: Vec<_> = errors
            .records()
            .map(|r| (r.code, r.severity, r.context))
            .collect();
        prop_assert_eq!(retained, expected);
    }
}

#[test]
fn first_record_lost_after_capacity_plus_one() {
    let mut errors = ErrorManager::new();
    errors.log(ErrorCode::OutOfMemory, Severity::Fatal, 1);
    for _ in 0..ERROR_LOG_SIZE {
        errors.log(ErrorCode::Timeout, Severity::Info, 0);
    }

    assert!(errors.records().all(|r| r.code != ErrorCode::OutOfMemory));

    // Clearing every logical record never resurfaces the overwritten one
    for _ in 0..ERROR_LOG_SIZE {
        assert_ne!(errors.get_last(), Some(ErrorCode::OutOfMemory));
        errors.clear_last();
    }
    assert_eq!(errors.get_last(), None);
}
