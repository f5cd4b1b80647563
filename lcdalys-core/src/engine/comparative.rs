//! Comparative composition: each active intervention is its own counterfactual.

use super::cumulative::apply_reduction;
use crate::intervention::Intervention;
use crate::projector::{Reducer, SeriesInfo};
use crate::timeseries::{BaselinePoint, FloatValue};
use std::collections::BTreeMap;

fn intensity_of(
    intervention: &Intervention,
    intensities: &BTreeMap<String, FloatValue>,
) -> FloatValue {
    intensities
        .get(&intervention.key)
        .copied()
        .unwrap_or(intervention.default_value)
}

/// Adjusted burden for each active intervention applied on its own.
///
/// Interventions at their minimum intensity are omitted rather than reported
/// at the baseline value.
pub fn compute_comparative_series<'a>(
    interventions: impl IntoIterator<Item = &'a Intervention>,
    intensities: &BTreeMap<String, FloatValue>,
    point: &BaselinePoint,
) -> BTreeMap<String, FloatValue> {
    interventions
        .into_iter()
        .filter_map(|intervention| {
            let intensity = intensity_of(intervention, intensities);
            intervention.is_active(intensity).then(|| {
                let reduction = intervention.reduction_contribution(intensity);
                (intervention.key.clone(), apply_reduction(point.value, reduction))
            })
        })
        .collect()
}

/// Reducer drawing one series per active intervention, in catalog order.
#[derive(Debug, Clone)]
pub struct ComparativeReducer<'a> {
    active: Vec<(&'a Intervention, FloatValue)>,
}

impl<'a> ComparativeReducer<'a> {
    /// Bind the interventions that are active at the given intensities.
    pub fn new(
        interventions: impl IntoIterator<Item = &'a Intervention>,
        intensities: &BTreeMap<String, FloatValue>,
    ) -> Self {
        let active = interventions
            .into_iter()
            .filter_map(|intervention| {
                let intensity = intensity_of(intervention, intensities);
                intervention
                    .is_active(intensity)
                    .then(|| (intervention, intervention.reduction_contribution(intensity)))
            })
            .collect();
        Self { active }
    }
}

impl Reducer for ComparativeReducer<'_> {
    fn series(&self) -> Vec<SeriesInfo> {
        self.active
            .iter()
            .map(|(intervention, _)| SeriesInfo {
                key: intervention.key.clone(),
                label: intervention.label.clone(),
            })
            .collect()
    }

    fn reduce(&self, point: &BaselinePoint) -> Vec<FloatValue> {
        self.active
            .iter()
            .map(|(_, reduction)| apply_reduction(point.value, *reduction))
            .collect()
    }
}
