//! Ranking function
//!
//! Totally orders filtered survivors by `best_load_score` and returns the
//! winner. Ties on score break deterministically to the lexicographically
//! smallest `load_id`, so the same input always yields the same choice.

use types::load::Load;

/// Pick the load with the maximum `best_load_score`; `None` on empty input.
pub fn pick_best(loads: Vec<Load>) -> Option<Load> {
    loads.into_iter().max_by(|a, b| {
        a.best_load_score
            .cmp(&b.best_load_score)
            // Inverted id comparison: among equal scores the smaller id
            // ranks higher.
            .then_with(|| b.load_id.cmp(&a.load_id))
    })
}
