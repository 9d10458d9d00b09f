//! # `toptrack-core`
//!
//! An online top-K popularity tracker: identifies the most-active keys in a
//! stream of touches, smooths each key's popularity with exponential decay,
//! and notifies callers via promote/demote callbacks when top-K membership
//! changes. A bounded LRU admission filter caps the per-epoch candidate set
//! so memory and compute stay constant regardless of stream cardinality.
//!
//! ## Quick Start
//!
//! ```rust
//! use toptrack_core::{TrackerConfig, TrackerParams, Tracker};
//!
//! let config = TrackerConfig {
//!     promote_capacity: 100,
//!     promote_thresh: 10,
//!     ..TrackerConfig::default()
//! };
//!
//! let mut tracker = Tracker::create(
//!     TrackerParams::new(config)
//!         .with_promote_cb(|key| println!("promoted: {key}"))
//!         .with_demote_cb(|key| println!("demoted: {key}")),
//! )?;
//!
//! tracker.touch(42);
//! tracker.progress();
//! # Ok::<(), toptrack_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod element;
pub mod error;
pub mod lru;
pub mod ranking;
pub mod score_table;
pub mod tracker;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod error_tests;

pub use config::{ConfigError, DecayConfig, TrackerConfig};
pub use element::{Element, Key};
pub use error::{Error, Result};
pub use lru::LruFilter;
pub use ranking::{rank_cmp, update_rank};
pub use score_table::ScoreTable;
pub use tracker::{Tracker, TrackerParams};
