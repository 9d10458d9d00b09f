//! Error types for `toptrack`.
//!
//! This module provides a unified error type for all tracker operations.
//! Only `Tracker::create` (and the `TrackerConfig` validation it wraps) can
//! fail; every other tracker operation is infallible or reports
//! [`Error::NoSuchKey`] without side effects.

use thiserror::Error;

use crate::element::Key;

/// Result type alias for `toptrack` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in `toptrack` operations.
///
/// Error codes follow the pattern `TRACK-XXX` for easy debugging.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// No promote callback was supplied (TRACK-001).
    #[error("[TRACK-001] a promote callback is required")]
    MissingPromoteCallback,

    /// No demote callback was supplied (TRACK-002).
    #[error("[TRACK-002] a demote callback is required")]
    MissingDemoteCallback,

    /// The LRU admission filter capacity was zero (TRACK-003).
    #[error("[TRACK-003] LRU capacity must be greater than zero")]
    ZeroCapacity,

    /// `promote_thresh` exceeds `promote_capacity` (TRACK-004).
    #[error(
        "[TRACK-004] promote_thresh ({promote_thresh}) must not exceed promote_capacity ({promote_capacity})"
    )]
    ThresholdExceedsCapacity {
        /// Configured promote threshold.
        promote_thresh: usize,
        /// Configured promote capacity.
        promote_capacity: usize,
    },

    /// A configuration field was outside its valid range (TRACK-005):
    /// `remove_thresh`, `exp_decay.m`, `exp_decay.c`, and
    /// `min_promote_score` must fall in `[0, 1]`; `ticks_per_flush` must be
    /// greater than zero.
    #[error("[TRACK-005] '{field}' is out of its valid range, got {value}")]
    DecayParamOutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The invalid value supplied.
        value: f64,
    },

    /// The tracker could not allocate a new element (TRACK-006).
    ///
    /// Rust's collections abort the process on allocation failure rather
    /// than returning a `Result`, so this variant is never constructed by
    /// `toptrack-core` itself; it is retained so the error taxonomy matches
    /// what callers on other platforms expect from the same interface.
    #[error("[TRACK-006] out of memory: score table is at capacity")]
    OutOfMemory,

    /// No element exists for the given key (TRACK-007).
    #[error("[TRACK-007] no tracked element for key {key}")]
    NoSuchKey {
        /// The key that was not found.
        key: Key,
    },
}

impl Error {
    /// Returns the error code (e.g., "TRACK-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingPromoteCallback => "TRACK-001",
            Self::MissingDemoteCallback => "TRACK-002",
            Self::ZeroCapacity => "TRACK-003",
            Self::ThresholdExceedsCapacity { .. } => "TRACK-004",
            Self::DecayParamOutOfRange { .. } => "TRACK-005",
            Self::OutOfMemory => "TRACK-006",
            Self::NoSuchKey { .. } => "TRACK-007",
        }
    }

    /// Returns true if this error indicates a configuration mistake made at
    /// [`Tracker::create`](crate::tracker::Tracker::create) time, as opposed
    /// to a runtime lookup miss.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        !matches!(self, Self::NoSuchKey { .. } | Self::OutOfMemory)
    }
}
