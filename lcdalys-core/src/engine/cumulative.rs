//! Cumulative composition: active interventions add up into one effect.

use crate::intervention::InterventionCatalog;
use crate::projector::{Reducer, SeriesInfo};
use crate::timeseries::{round_half_up, BaselinePoint, FloatValue};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Key of the single series produced in cumulative mode.
pub const CUMULATIVE_SERIES_KEY: &str = "interventions";

/// Combined reduction of every enabled intervention, capped at 1.
///
/// Disabled interventions contribute nothing whatever their stored
/// intensity. An enabled key without a stored intensity uses the
/// intervention's default; keys missing from the catalog are ignored.
pub fn compute_cumulative_reduction(
    catalog: &InterventionCatalog,
    enabled: &BTreeSet<String>,
    intensities: &BTreeMap<String, FloatValue>,
) -> FloatValue {
    let total: FloatValue = enabled
        .iter()
        .filter_map(|key| {
            let intervention = catalog.get(key);
            if intervention.is_none() {
                debug!(key = %key, "Ignoring unknown intervention");
            }
            intervention
        })
        .map(|intervention| {
            let intensity = intensities
                .get(&intervention.key)
                .copied()
                .unwrap_or(intervention.default_value);
            intervention.reduction_contribution(intensity)
        })
        .sum();

    // Burden cannot go negative
    total.clamp(0.0, 1.0)
}

/// Burden remaining after removing `reduction` from `value`.
pub fn apply_reduction(value: FloatValue, reduction: FloatValue) -> FloatValue {
    round_half_up(value * (1.0 - reduction.clamp(0.0, 1.0)))
}

/// Reducer applying one precomputed cumulative reduction to every point.
#[derive(Debug, Clone)]
pub struct CumulativeReducer {
    reduction: FloatValue,
}

impl CumulativeReducer {
    pub fn new(reduction: FloatValue) -> Self {
        Self { reduction }
    }

    pub fn reduction(&self) -> FloatValue {
        self.reduction
    }
}

impl Reducer for CumulativeReducer {
    fn series(&self) -> Vec<SeriesInfo> {
        vec![SeriesInfo {
            key: CUMULATIVE_SERIES_KEY.to_string(),
            label: "With interventions".to_string(),
        }]
    }

    fn reduce(&self, point: &BaselinePoint) -> Vec<FloatValue> {
        vec![apply_reduction(point.value, self.reduction)]
    }
}
