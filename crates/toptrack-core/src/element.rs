//! The per-key record tracked by the score table and ranking engine.

/// Identifier for a tracked key.
///
/// Opaque to the tracker: callers are free to use this as a hash of a
/// string, a numeric ID, or anything else that fits in 64 bits.
pub type Key = u64;

/// A single key's tracked state.
///
/// `score` decays every [`progress`](crate::tracker::Tracker::progress) call
/// and is bumped when the key is touched; `min_score` is a caller-imposed
/// floor that never decays. The effective score used for ranking is always
/// `max(score, min_score)` (see [`Element::effective_score`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// The tracked key.
    pub key: Key,
    /// Decayed popularity score.
    pub score: f64,
    /// Caller-imposed floor on the effective score; never decays on its own.
    pub min_score: f64,
    /// Whether this element currently counts toward `promote_capacity`.
    pub promoted: bool,
}

impl Element {
    /// Creates a freshly-admitted element with the initial score
    /// `exp_decay.c`, as prescribed for first touches.
    #[must_use]
    pub fn new(key: Key, initial_score: f64) -> Self {
        Self {
            key,
            score: initial_score,
            min_score: 0.0,
            promoted: false,
        }
    }

    /// The score used for ranking: the greater of the decayed score and the
    /// caller-imposed floor.
    #[must_use]
    pub fn effective_score(&self) -> f64 {
        self.score.max(self.min_score)
    }
}
