//! Tests for `error` module

use super::error::*;

// -------------------------------------------------------------------------
// Error code tests
// -------------------------------------------------------------------------

#[test]
fn test_error_codes_are_unique() {
    // Arrange - create all error variants
    let errors: Vec<Error> = vec![
        Error::MissingPromoteCallback,
        Error::MissingDemoteCallback,
        Error::ZeroCapacity,
        Error::ThresholdExceedsCapacity {
            promote_thresh: 10,
            promote_capacity: 5,
        },
        Error::DecayParamOutOfRange {
            field: "remove_thresh",
            value: 1.5,
        },
        Error::OutOfMemory,
        Error::NoSuchKey { key: 42 },
    ];

    // Act - collect all codes
    let codes: Vec<&str> = errors.iter().map(Error::code).collect();

    // Assert - all codes are unique and follow pattern
    let mut unique_codes = codes.clone();
    unique_codes.sort_unstable();
    unique_codes.dedup();
    assert_eq!(codes.len(), unique_codes.len(), "Error codes must be unique");

    for code in &codes {
        assert!(code.starts_with("TRACK-"), "Code {code} should start with TRACK-");
    }
}

#[test]
fn test_error_display_includes_code() {
    // Arrange
    let err = Error::NoSuchKey { key: 7 };

    // Act
    let display = format!("{err}");

    // Assert
    assert!(display.contains("TRACK-007"));
    assert!(display.contains('7'));
}

#[test]
fn test_threshold_exceeds_capacity_display() {
    // Arrange
    let err = Error::ThresholdExceedsCapacity {
        promote_thresh: 64,
        promote_capacity: 32,
    };

    // Act
    let display = format!("{err}");

    // Assert
    assert!(display.contains("64"));
    assert!(display.contains("32"));
    assert!(display.contains("TRACK-004"));
}

#[test]
fn test_decay_param_out_of_range_display() {
    // Arrange
    let err = Error::DecayParamOutOfRange {
        field: "exp_decay.m",
        value: -0.1,
    };

    // Act
    let display = format!("{err}");

    // Assert
    assert!(display.contains("exp_decay.m"));
    assert!(display.contains("TRACK-005"));
}

// -------------------------------------------------------------------------
// Classification tests
// -------------------------------------------------------------------------

#[test]
fn test_config_errors_are_config_errors() {
    assert!(Error::MissingPromoteCallback.is_config_error());
    assert!(Error::MissingDemoteCallback.is_config_error());
    assert!(Error::ZeroCapacity.is_config_error());
    assert!(Error::ThresholdExceedsCapacity {
        promote_thresh: 1,
        promote_capacity: 1
    }
    .is_config_error());
}

#[test]
fn test_runtime_errors_are_not_config_errors() {
    assert!(!Error::NoSuchKey { key: 1 }.is_config_error());
    assert!(!Error::OutOfMemory.is_config_error());
}

#[test]
fn test_error_is_send_sync() {
    // Required for use from callback closures stored on the tracker.
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}

#[test]
fn test_error_debug_impl() {
    let err = Error::NoSuchKey { key: 99 };
    let debug = format!("{err:?}");
    assert!(debug.contains("NoSuchKey"));
    assert!(debug.contains("99"));
}
