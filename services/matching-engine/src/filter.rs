//! Filter pipeline
//!
//! Applies the caller's optional predicates to the candidate set as one
//! conjunction, preserving input order. Booked loads are excluded before
//! any criterion runs. Pure function of its two inputs.

use types::criteria::FilterCriteria;
use types::load::{Load, RunType};

/// Return the order-preserving subsequence of `loads` that are unbooked
/// and satisfy every predicate present in `criteria`.
pub fn apply(loads: &[Load], criteria: &FilterCriteria) -> Vec<Load> {
    loads
        .iter()
        .filter(|load| !load.booked && matches(load, criteria))
        .cloned()
        .collect()
}

/// Check a single load against every present criterion.
fn matches(load: &Load, c: &FilterCriteria) -> bool {
    if let Some(state) = &c.origin_state {
        if !load.origin_state.eq_ignore_ascii_case(state) {
            return false;
        }
    }
    if let Some(state) = &c.destination_state {
        if !load.destination_state.eq_ignore_ascii_case(state) {
            return false;
        }
    }
    if let Some(equipment) = &c.equipment_type {
        if !load.equipment_type.eq_ignore_ascii_case(equipment) {
            return false;
        }
    }
    if let Some(min) = &c.min_price {
        if load.loadboard_rate < *min {
            return false;
        }
    }
    if let Some(max) = &c.max_price {
        if load.loadboard_rate > *max {
            return false;
        }
    }
    if let Some(min) = &c.min_rpm {
        if load.rpm < *min {
            return false;
        }
    }
    if let Some(max) = &c.max_rpm {
        if load.rpm > *max {
            return false;
        }
    }
    if let Some(min) = c.min_miles {
        if load.miles < min {
            return false;
        }
    }
    if let Some(max) = c.max_miles {
        if load.miles > max {
            return false;
        }
    }
    if let Some(after) = &c.pickup_after {
        if load.pickup_datetime < *after {
            return false;
        }
    }
    if let Some(before) = &c.pickup_before {
        if load.pickup_datetime > *before {
            return false;
        }
    }
    if let Some(commodity) = &c.commodity_type {
        let haystack = load.commodity_type.to_lowercase();
        if !haystack.contains(&commodity.to_lowercase()) {
            return false;
        }
    }
    if let Some(run_type) = c.run_type {
        // A load listed as `either` matches any requested run type.
        if load.run_type != run_type && load.run_type != RunType::Either {
            return false;
        }
    }
    if let Some(min) = c.min_weight {
        if load.weight < min {
            return false;
        }
    }
    if let Some(max) = c.max_weight {
        if load.weight > max {
            return false;
        }
    }
    true
}
