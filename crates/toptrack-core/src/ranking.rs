//! Sorts tracked elements by effective score and applies the
//! promote/retain/demote/evict decision for each rank.

use std::cmp::Ordering;

use crate::element::Key;
use crate::score_table::ScoreTable;

/// Compares two `(key, effective_score)` pairs for ranking purposes.
///
/// Scores within `remove_thresh` of each other are considered tied, in
/// which case the comparison falls back to key order so that the overall
/// ordering is a strict weak ordering (required by `sort_by`, and needed so
/// that rank assignment is deterministic run to run). Otherwise, the higher
/// score sorts first.
///
/// Scores are assumed finite; a NaN score is a caller bug; debug builds
/// assert against it rather than silently producing an unspecified order.
#[must_use]
pub fn rank_cmp(a_key: Key, a_score: f64, b_key: Key, b_score: f64, remove_thresh: f64) -> Ordering {
    debug_assert!(!a_score.is_nan() && !b_score.is_nan(), "ranking requires finite scores");

    if (a_score - b_score).abs() < remove_thresh {
        return a_key.cmp(&b_key);
    }
    // Descending: higher score ranks first.
    b_score.partial_cmp(&a_score).unwrap_or(Ordering::Equal)
}

/// Re-ranks every element in `table`, promoting, retaining, demoting, or
/// evicting each according to its rank:
///
/// - Ranks `0..promote_thresh` with an effective score above
///   `min_promote_score` are promoted (if not already) via `promote_cb`.
/// - Ranks `>= promote_capacity` are demoted (if currently promoted) via
///   `demote_cb`, and the element is dropped from `table` entirely.
///
/// Elements with a rank in between are left untouched.
pub fn update_rank(
    table: &mut ScoreTable,
    remove_thresh: f64,
    promote_thresh: usize,
    promote_capacity: usize,
    min_promote_score: f64,
    mut promote_cb: impl FnMut(Key),
    mut demote_cb: impl FnMut(Key),
) {
    let mut ranked: Vec<(Key, f64)> = table.iter().map(|e| (e.key, e.effective_score())).collect();
    ranked.sort_by(|a, b| rank_cmp(a.0, a.1, b.0, b.1, remove_thresh));

    for (i, &(key, score)) in ranked.iter().enumerate() {
        if i < promote_thresh && score > min_promote_score {
            if let Some(e) = table.get_mut(key) {
                if !e.promoted {
                    e.promoted = true;
                    promote_cb(key);
                }
            }
        }

        if i >= promote_capacity {
            if let Some(e) = table.get_mut(key) {
                if e.promoted {
                    e.promoted = false;
                    demote_cb(key);
                }
            }
            table.remove(key);
        }
    }
}
