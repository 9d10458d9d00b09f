//! `toptrack` configuration
//!
//! Provides configuration file support via `toptrack.toml`, environment
//! variables, and in-process defaults.
//!
//! # Priority (highest to lowest)
//!
//! 1. Environment variables (`TOPTRACK_*`)
//! 2. Configuration file (`toptrack.toml`)
//! 3. Default values

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Error as TrackerError;

/// Configuration loading/parsing errors, distinct from [`TrackerError`]
/// since they can occur before any tracker parameters have even been
/// assembled (a malformed TOML file, for instance).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration from its source.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// Failed to serialize configuration back to TOML.
    #[error("failed to serialize configuration: {0}")]
    SerializeError(String),
}

/// Exponential decay parameters applied on every
/// [`progress`](crate::tracker::Tracker::progress) call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Multiplicative decay factor applied to every live score, in `[0, 1]`.
    pub m: f64,
    /// Additive bump applied to scores of keys present in the LRU this
    /// epoch, in `[0, 1]`.
    pub c: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        // Time constant -1/ln(m) ~= 4.5 epochs; steady state c/(1-m) = 1.0
        // for a continuously touched key, matching the [0,1] score range.
        Self { m: 0.8, c: 0.2 }
    }
}

/// The tracker's configuration options.
///
/// See `SPEC_FULL.md` §6 for the full rationale behind each field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Legacy tick counter, retained for configuration-file compatibility
    /// with the tick-driven predecessor design. This tracker is
    /// explicit-progress (the caller drives epochs by calling `progress()`
    /// directly), so this field is validated but otherwise inert.
    pub ticks_per_flush: u32,
    /// Maximum live elements in the score table; also the LRU admission
    /// filter's capacity.
    pub promote_capacity: usize,
    /// Top-N ranks promoted on each epoch. Must not exceed `promote_capacity`.
    pub promote_thresh: usize,
    /// Hysteresis band: score differences smaller than this are considered
    /// a tie for ranking purposes, in `[0, 1]`.
    pub remove_thresh: f64,
    /// Exponential decay parameters.
    pub exp_decay: DecayConfig,
    /// Minimum effective score required to be promoted, in `[0, 1]`.
    pub min_promote_score: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            ticks_per_flush: 1,
            promote_capacity: 1024,
            promote_thresh: 64,
            remove_thresh: 0.05,
            exp_decay: DecayConfig::default(),
            min_promote_score: 0.0,
        }
    }
}

impl TrackerConfig {
    /// Loads configuration from `toptrack.toml` in the current directory,
    /// layered over defaults and `TOPTRACK_`-prefixed environment
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the file (when present) fails to parse.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("toptrack.toml")
    }

    /// Loads configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file fails to parse.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("TOPTRACK_").split("_").lowercase(false));

        figment.extract().map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Builds a configuration from a TOML string, layered over defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the string fails to parse.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str));

        figment.extract().map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Serializes this configuration to a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }

    /// Validates range and ordering constraints, returning the same error
    /// taxonomy [`Tracker::create`](crate::tracker::Tracker::create) uses so
    /// there is exactly one source of truth for what makes a configuration
    /// valid.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ZeroCapacity`], [`TrackerError::ThresholdExceedsCapacity`],
    /// or [`TrackerError::DecayParamOutOfRange`] as appropriate.
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.promote_capacity == 0 {
            return Err(TrackerError::ZeroCapacity);
        }
        if self.promote_thresh > self.promote_capacity {
            return Err(TrackerError::ThresholdExceedsCapacity {
                promote_thresh: self.promote_thresh,
                promote_capacity: self.promote_capacity,
            });
        }
        if self.ticks_per_flush == 0 {
            return Err(TrackerError::DecayParamOutOfRange {
                field: "ticks_per_flush",
                value: f64::from(self.ticks_per_flush),
            });
        }
        for (field, value) in [
            ("remove_thresh", self.remove_thresh),
            ("exp_decay.m", self.exp_decay.m),
            ("exp_decay.c", self.exp_decay.c),
            ("min_promote_score", self.min_promote_score),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(TrackerError::DecayParamOutOfRange { field, value });
            }
        }
        Ok(())
    }
}
