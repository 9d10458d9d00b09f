//! The tracker facade: wires the LRU admission filter, score table, and
//! ranking engine together behind the public API.

use crate::config::TrackerConfig;
use crate::element::Key;
use crate::error::{Error, Result};
use crate::lru::LruFilter;
use crate::ranking::update_rank;
use crate::score_table::ScoreTable;

/// Parameters consumed by [`Tracker::create`].
///
/// Built incrementally via [`TrackerParams::new`] and
/// [`TrackerParams::with_promote_cb`]/[`TrackerParams::with_demote_cb`] so
/// that a caller assembling parameters programmatically (e.g. from parsed
/// configuration, before callbacks are known) gets the same missing-callback
/// validation a null function pointer would have produced in a C API.
pub struct TrackerParams {
    /// Tuning parameters for decay and ranking.
    pub config: TrackerConfig,
    promote_cb: Option<Box<dyn FnMut(Key)>>,
    demote_cb: Option<Box<dyn FnMut(Key)>>,
}

impl TrackerParams {
    /// Starts building parameters around the given configuration.
    #[must_use]
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            promote_cb: None,
            demote_cb: None,
        }
    }

    /// Sets the callback invoked the first time a key is promoted into the
    /// top-`promote_thresh` ranks.
    #[must_use]
    pub fn with_promote_cb(mut self, cb: impl FnMut(Key) + 'static) -> Self {
        self.promote_cb = Some(Box::new(cb));
        self
    }

    /// Sets the callback invoked when a previously promoted key falls past
    /// `promote_capacity` and is removed.
    #[must_use]
    pub fn with_demote_cb(mut self, cb: impl FnMut(Key) + 'static) -> Self {
        self.demote_cb = Some(Box::new(cb));
        self
    }
}

/// An online top-K popularity tracker.
///
/// A `Tracker` is single-threaded: all operations assume exclusive,
/// synchronous access, and callbacks must not call back into the same
/// tracker (see module docs on re-entrancy).
pub struct Tracker {
    config: TrackerConfig,
    lru: LruFilter,
    table: ScoreTable,
    promote_cb: Box<dyn FnMut(Key)>,
    demote_cb: Box<dyn FnMut(Key)>,
    #[cfg(debug_assertions)]
    in_progress: bool,
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("Tracker");
        s.field("config", &self.config)
            .field("lru", &self.lru)
            .field("table", &self.table);
        #[cfg(debug_assertions)]
        s.field("in_progress", &self.in_progress);
        s.finish_non_exhaustive()
    }
}

impl Tracker {
    /// Validates `params` and creates a tracker.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingPromoteCallback`] or
    /// [`Error::MissingDemoteCallback`] if either callback was not set, or
    /// any of the `TrackerConfig` validation errors from
    /// [`TrackerConfig::validate`](crate::config::TrackerConfig::validate).
    /// No partially-initialized tracker escapes a failed `create`.
    pub fn create(params: TrackerParams) -> Result<Self> {
        params.config.validate()?;
        let promote_cb = params.promote_cb.ok_or(Error::MissingPromoteCallback)?;
        let demote_cb = params.demote_cb.ok_or(Error::MissingDemoteCallback)?;
        let lru = LruFilter::new(params.config.promote_capacity)?;

        tracing::info!(
            promote_capacity = params.config.promote_capacity,
            promote_thresh = params.config.promote_thresh,
            remove_thresh = params.config.remove_thresh,
            exp_decay_m = params.config.exp_decay.m,
            exp_decay_c = params.config.exp_decay.c,
            "tracker created"
        );

        Ok(Self {
            config: params.config,
            lru,
            table: ScoreTable::new(),
            promote_cb,
            demote_cb,
            #[cfg(debug_assertions)]
            in_progress: false,
        })
    }

    /// Records a touch for `key` in the current epoch. Infallible; hot path.
    pub fn touch(&mut self, key: Key) {
        tracing::trace!(key, "touch");
        self.lru.touch(key);
    }

    /// Advances the tracker by one epoch:
    ///
    /// 1. Every live element's score decays by `exp_decay.m`; elements
    ///    touched this epoch additionally gain `exp_decay.c`.
    /// 2. Keys touched this epoch but not yet tracked are inserted at the
    ///    baseline score `exp_decay.c`.
    /// 3. The ranking engine promotes, retains, or demotes/evicts each
    ///    element and fires `promote_cb`/`demote_cb` for transitions.
    /// 4. The LRU admission filter is reset for the next epoch.
    ///
    /// Calling `progress` re-entrantly from inside a callback is a logic
    /// error; debug builds panic on it rather than silently corrupting
    /// state.
    pub fn progress(&mut self) {
        #[cfg(debug_assertions)]
        {
            assert!(!self.in_progress, "progress() must not be called re-entrantly from a callback");
            self.in_progress = true;
        }

        let m = self.config.exp_decay.m;
        let c = self.config.exp_decay.c;

        for e in self.table.iter_mut() {
            e.score *= m;
            if self.lru.contains(e.key) {
                e.score += c;
            }
            tracing::trace!(key = e.key, score = e.score, "decayed");
        }

        for k in self.lru.iter().collect::<Vec<_>>() {
            self.table.get_or_insert(k, c);
        }

        if !self.table.is_empty() {
            let Self {
                table,
                promote_cb,
                demote_cb,
                config,
                ..
            } = self;
            update_rank(
                table,
                config.remove_thresh,
                config.promote_thresh,
                config.promote_capacity,
                config.min_promote_score,
                |key| {
                    tracing::debug!(key, "promoted");
                    (*promote_cb)(key);
                },
                |key| {
                    tracing::debug!(key, "demoted");
                    (*demote_cb)(key);
                },
            );
        }

        self.lru.reset();

        #[cfg(debug_assertions)]
        {
            self.in_progress = false;
        }
    }

    /// Returns the effective score for `key` (`max(score, min_score)`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchKey`] if `key` is not currently tracked.
    pub fn get_score(&self, key: Key) -> Result<f64> {
        self.table
            .get(key)
            .map(crate::element::Element::effective_score)
            .ok_or(Error::NoSuchKey { key })
    }

    /// Sets (or raises) the score floor for `key`, creating a tracked
    /// element for it if one does not already exist.
    ///
    /// Per the design's Open Question resolution, an element created purely
    /// by `set_min_score` counts against `promote_capacity` identically to a
    /// touched element. The new floor only affects ranking starting at the
    /// next `progress` call.
    pub fn set_min_score(&mut self, key: Key, min_score: f64) {
        let e = self.table.get_or_insert(key, self.config.exp_decay.c);
        e.min_score = min_score;
    }

    /// Removes `key` from the tracker immediately, without waiting for the
    /// next `progress` call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchKey`] if `key` is not currently tracked.
    pub fn remove(&mut self, key: Key) -> Result<()> {
        self.table.remove(key).map(|_| ()).ok_or(Error::NoSuchKey { key })
    }

    /// Returns the keys currently promoted, in unspecified order.
    ///
    /// Pure read access to already-computed ranking state; does not mutate
    /// the tracker or persist anything.
    #[must_use]
    pub fn promoted_keys(&self) -> Vec<Key> {
        self.table.iter().filter(|e| e.promoted).map(|e| e.key).collect()
    }

    /// The number of elements currently tracked (bounded by
    /// `promote_capacity` at quiescence).
    #[must_use]
    pub fn table_size(&self) -> usize {
        self.table.size()
    }
}
