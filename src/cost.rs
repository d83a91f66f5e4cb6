//! Cost breakdown computation.
//!
//! Hours convert to currency at a fixed per-hour rate. Rounding to two
//! decimals happens at display time only; the stored totals stay exact.

use std::collections::BTreeSet;

use crate::models::Feature;

/// Fixed rate converting estimated hours to currency
pub const PER_HOUR_COST: f64 = 10.0;

/// The computed result table: selected features plus totals
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    pub features: Vec<Feature>,
    pub total_hours: f64,
    pub total_cost: f64,
}

/// Cost of a single feature at the fixed rate
pub fn feature_cost(feature: &Feature) -> f64 {
    feature.hours * PER_HOUR_COST
}

/// Build a breakdown from the loaded feature list and the set of selected
/// names. Rows keep the loaded list's order, not selection order.
pub fn compute_breakdown(loaded: &[Feature], selected: &BTreeSet<String>) -> CostBreakdown {
    let features: Vec<Feature> = loaded
        .iter()
        .filter(|f| selected.contains(&f.name))
        .cloned()
        .collect();
    let total_hours: f64 = features.iter().map(|f| f.hours).sum();
    let total_cost = total_hours * PER_HOUR_COST;

    CostBreakdown {
        features,
        total_hours,
        total_cost,
    }
}
