//! Key-addressed storage for tracked [`Element`]s.

use rustc_hash::FxHashMap;

use crate::element::{Element, Key};

/// Holds one [`Element`] per key currently known to the tracker.
///
/// Backed by an `FxHashMap` rather than the standard library's SipHash-based
/// `HashMap`, since keys here are plain `u64`s on a hot per-touch path and do
/// not need DoS-resistant hashing.
#[derive(Debug, Default)]
pub struct ScoreTable {
    entries: FxHashMap<Key, Element>,
}

impl ScoreTable {
    /// Creates an empty score table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a mutable reference to the element for `key`, inserting a
    /// fresh one (with `score = initial_score`) if none exists yet.
    pub fn get_or_insert(&mut self, key: Key, initial_score: f64) -> &mut Element {
        self.entries
            .entry(key)
            .or_insert_with(|| Element::new(key, initial_score))
    }

    /// Returns the element for `key`, if tracked.
    #[must_use]
    pub fn get(&self, key: Key) -> Option<&Element> {
        self.entries.get(&key)
    }

    /// Returns a mutable reference to the element for `key`, if tracked.
    pub fn get_mut(&mut self, key: Key) -> Option<&mut Element> {
        self.entries.get_mut(&key)
    }

    /// Removes and returns the element for `key`, if it was tracked.
    pub fn remove(&mut self, key: Key) -> Option<Element> {
        self.entries.remove(&key)
    }

    /// The number of elements currently tracked.
    #[must_use]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all tracked elements, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.entries.values()
    }

    /// Mutably iterates over all tracked elements, in unspecified order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.entries.values_mut()
    }
}
