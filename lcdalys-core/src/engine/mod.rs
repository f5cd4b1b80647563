//! The reduction engine turns a selection snapshot into modified burden series.
//!
//! Three pure computations are available, selected by the snapshot's mode:
//!
//! - **cumulative**: enabled interventions are summed into one reduction,
//!   capped at 1 ([`compute_cumulative_reduction`])
//! - **comparative**: every active intervention is applied on its own
//!   ([`compute_comparative_series`])
//! - **scenario**: a precomputed scenario effect, rescaled by the advanced
//!   settings ([`compute_scenario_adjusted_value`])
//!
//! [`ReductionEngine`] owns the three catalogs and binds the appropriate
//! computation to a snapshot as a [`Reducer`] for the projector.
//!
//! None of these computations fail. Out-of-range inputs are clamped, keys
//! missing from a catalog are skipped and a window without data yields an
//! empty projection.

mod comparative;
mod cumulative;
mod scenario;

#[cfg(test)]
mod tests;

pub use comparative::{compute_comparative_series, ComparativeReducer};
pub use cumulative::{
    apply_reduction, compute_cumulative_reduction, CumulativeReducer, CUMULATIVE_SERIES_KEY,
};
pub use scenario::{
    compute_scenario_adjusted_value, scenario_adjusted_value, ScenarioAdjustments,
    ScenarioReducer,
};

use crate::intervention::{Intervention, InterventionCatalog};
use crate::projector::{order_by_burden, project, Projection, Reducer};
use crate::scenario::{Scenario, ScenarioCatalog};
use crate::selection::{CompositionMode, Mode, SelectionState};
use crate::settings::AdvancedSettingsRegistry;
use crate::timeseries::{BaselinePoint, BaselineSeries, FloatValue};
use std::collections::BTreeMap;
use tracing::debug;

/// The catalogs an engine computes against.
#[derive(Debug, Clone, Default)]
pub struct ReductionEngine {
    interventions: InterventionCatalog,
    scenarios: ScenarioCatalog,
    settings: AdvancedSettingsRegistry,
}

impl ReductionEngine {
    pub fn new(
        interventions: InterventionCatalog,
        scenarios: ScenarioCatalog,
        settings: AdvancedSettingsRegistry,
    ) -> Self {
        Self {
            interventions,
            scenarios,
            settings,
        }
    }

    pub fn interventions(&self) -> &InterventionCatalog {
        &self.interventions
    }

    pub fn scenarios(&self) -> &ScenarioCatalog {
        &self.scenarios
    }

    pub fn settings(&self) -> &AdvancedSettingsRegistry {
        &self.settings
    }

    /// Startup snapshot for these catalogs.
    pub fn default_selection(&self) -> SelectionState {
        SelectionState::new(&self.interventions, &self.settings)
    }

    /// Combined reduction of the snapshot's enabled interventions.
    pub fn cumulative_reduction(&self, selection: &SelectionState) -> FloatValue {
        compute_cumulative_reduction(
            &self.interventions,
            &selection.enabled_interventions,
            &selection.intervention_intensity,
        )
    }

    /// Independent adjusted values for the snapshot's enabled, active interventions.
    pub fn comparative_series(
        &self,
        selection: &SelectionState,
        point: &BaselinePoint,
    ) -> BTreeMap<String, FloatValue> {
        compute_comparative_series(
            self.enabled_interventions(selection),
            &selection.intervention_intensity,
            point,
        )
    }

    /// Adjusted value of one scenario, `None` if the key is not in the catalog.
    pub fn scenario_adjusted_value(
        &self,
        selection: &SelectionState,
        scenario_key: &str,
        point: &BaselinePoint,
    ) -> Option<FloatValue> {
        let scenario = self.scenarios.get(scenario_key)?;
        Some(compute_scenario_adjusted_value(
            point,
            scenario,
            &self.settings,
            &selection.advanced_settings,
        ))
    }

    /// Settings of the snapshot resolved against this engine's registry.
    pub fn adjustments(&self, selection: &SelectionState) -> ScenarioAdjustments {
        ScenarioAdjustments::resolve(&self.settings, &selection.advanced_settings)
    }

    /// Selected scenarios in draw order.
    ///
    /// Unknown keys are dropped. Checklist selections are ordered by burden
    /// at `reference`, largest first.
    pub fn selected_scenarios(
        &self,
        selection: &SelectionState,
        reference: Option<&BaselinePoint>,
    ) -> Vec<&Scenario> {
        let scenarios: Vec<&Scenario> = selection
            .scenarios
            .keys()
            .into_iter()
            .filter_map(|key| {
                let scenario = self.scenarios.get(key);
                if scenario.is_none() {
                    debug!(key = %key, "Ignoring unknown scenario");
                }
                scenario
            })
            .collect();

        if selection.scenarios.is_checklist() {
            order_by_burden(scenarios, reference, &self.adjustments(selection))
        } else {
            scenarios
        }
    }

    /// Bind the computation selected by the snapshot.
    ///
    /// `reference` is the point whose burden orders checklist scenarios; use
    /// the first point of the baseline.
    pub fn reducer<'a>(
        &'a self,
        selection: &SelectionState,
        reference: Option<&BaselinePoint>,
    ) -> Box<dyn Reducer + 'a> {
        match (selection.mode, selection.composition_mode) {
            (Mode::Interventions, CompositionMode::Cumulative) => {
                Box::new(CumulativeReducer::new(self.cumulative_reduction(selection)))
            }
            (Mode::Interventions, CompositionMode::Comparative) => Box::new(ComparativeReducer::new(
                self.enabled_interventions(selection),
                &selection.intervention_intensity,
            )),
            (Mode::Scenarios, _) => Box::new(ScenarioReducer::new(
                self.selected_scenarios(selection, reference),
                self.adjustments(selection),
            )),
        }
    }

    /// Project `baseline` through the snapshot's computation and window.
    pub fn project(&self, baseline: &BaselineSeries, selection: &SelectionState) -> Projection {
        let reference = baseline.first();
        let reducer = self.reducer(selection, reference.as_ref());
        project(baseline, &selection.window, reducer.as_ref())
    }

    fn enabled_interventions(&self, selection: &SelectionState) -> Vec<&Intervention> {
        self.interventions
            .iter()
            .filter(|i| selection.enabled_interventions.contains(&i.key))
            .collect()
    }
}
