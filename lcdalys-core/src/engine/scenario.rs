//! Scenario adjustment.
//!
//! A scenario's reduction factor and the baseline it applies to are both
//! rescaled by the advanced settings:
//!
//! $$ f = clamp\left(f_0 \cdot m_{tech} \cdot \frac{s_{indoor}}{\hat{s}_{indoor}}, 0, 1\right) $$
//! $$ B' = B \cdot \frac{i}{\hat{i}} \cdot \frac{c}{\hat{c}} \cdot \frac{\bar{w}}{\hat{\bar{w}}} $$
//! $$ DALYs = round(B' \cdot (1 - f)) $$
//!
//! where hatted quantities are defaults, $m_{tech}$ is the technology
//! multiplier ratio and $\bar{w} = 0.7 w_{less} + 0.3 w_{moderate}$. The
//! indoor-air ratio only applies when $f_0 > 0$.

use crate::projector::{Reducer, SeriesInfo};
use crate::scenario::{Scenario, ScenarioCategory};
use crate::settings::{
    AdvancedSettingValues, AdvancedSettingsRegistry, ANNUAL_INFECTION_RATE,
    FAR_UVC_EFFECTIVENESS_MULTIPLIER, HEPA_EFFECTIVENESS_MULTIPLIER,
    INDOOR_AIR_TRANSMISSION_PERCENT, LONG_COVID_CONVERSION_RATE,
};
use crate::timeseries::{round_half_up, BaselinePoint, FloatValue};

/// Advanced settings resolved into the ratios the scenario computation uses.
///
/// Resolving once per snapshot avoids repeated registry lookups per point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioAdjustments {
    pub infection_rate_ratio: FloatValue,
    pub conversion_rate_ratio: FloatValue,
    pub daly_weight_ratio: FloatValue,
    pub indoor_air_ratio: FloatValue,
    pub hepa_multiplier: FloatValue,
    pub far_uvc_multiplier: FloatValue,
}

impl Default for ScenarioAdjustments {
    fn default() -> Self {
        Self {
            infection_rate_ratio: 1.0,
            conversion_rate_ratio: 1.0,
            daly_weight_ratio: 1.0,
            indoor_air_ratio: 1.0,
            hepa_multiplier: 1.0,
            far_uvc_multiplier: 1.0,
        }
    }
}

impl ScenarioAdjustments {
    pub fn resolve(registry: &AdvancedSettingsRegistry, values: &AdvancedSettingValues) -> Self {
        Self {
            infection_rate_ratio: values.ratio(registry, ANNUAL_INFECTION_RATE),
            conversion_rate_ratio: values.ratio(registry, LONG_COVID_CONVERSION_RATE),
            daly_weight_ratio: values.average_daly_weight_ratio(registry),
            indoor_air_ratio: values.ratio(registry, INDOOR_AIR_TRANSMISSION_PERCENT),
            hepa_multiplier: values.ratio(registry, HEPA_EFFECTIVENESS_MULTIPLIER),
            far_uvc_multiplier: values.ratio(registry, FAR_UVC_EFFECTIVENESS_MULTIPLIER),
        }
    }

    /// Technology effectiveness multiplier for a scenario category.
    pub fn multiplier(&self, category: ScenarioCategory) -> FloatValue {
        match category {
            ScenarioCategory::Hepa => self.hepa_multiplier,
            ScenarioCategory::FarUvc => self.far_uvc_multiplier,
            ScenarioCategory::Baseline | ScenarioCategory::Other => 1.0,
        }
    }

    /// Scale applied to the baseline value itself.
    pub fn baseline_scale(&self) -> FloatValue {
        self.infection_rate_ratio * self.conversion_rate_ratio * self.daly_weight_ratio
    }

    /// Final reduction factor for a base factor, clamped into `[0, 1]`.
    pub fn reduction_factor(&self, base: FloatValue, category: ScenarioCategory) -> FloatValue {
        let mut factor = base * self.multiplier(category);
        if base > 0.0 {
            factor *= self.indoor_air_ratio;
        }
        if factor.is_finite() {
            factor.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Adjusted burden for a scenario at one baseline point.
pub fn compute_scenario_adjusted_value(
    point: &BaselinePoint,
    scenario: &Scenario,
    registry: &AdvancedSettingsRegistry,
    settings: &AdvancedSettingValues,
) -> FloatValue {
    scenario_adjusted_value(point, scenario, &ScenarioAdjustments::resolve(registry, settings))
}

/// As [`compute_scenario_adjusted_value`] with settings already resolved.
pub fn scenario_adjusted_value(
    point: &BaselinePoint,
    scenario: &Scenario,
    adjustments: &ScenarioAdjustments,
) -> FloatValue {
    let base = scenario.base_reduction_factor(point);
    let factor = adjustments.reduction_factor(base, scenario.category);
    let adjusted_baseline = point.value * adjustments.baseline_scale();
    round_half_up(adjusted_baseline * (1.0 - factor))
}

/// Reducer drawing one series per selected scenario.
#[derive(Debug, Clone)]
pub struct ScenarioReducer<'a> {
    scenarios: Vec<&'a Scenario>,
    adjustments: ScenarioAdjustments,
}

impl<'a> ScenarioReducer<'a> {
    /// Bind scenarios in the order their series should be drawn.
    pub fn new(scenarios: Vec<&'a Scenario>, adjustments: ScenarioAdjustments) -> Self {
        Self {
            scenarios,
            adjustments,
        }
    }

    pub fn scenarios(&self) -> &[&'a Scenario] {
        &self.scenarios
    }
}

impl Reducer for ScenarioReducer<'_> {
    fn series(&self) -> Vec<SeriesInfo> {
        self.scenarios
            .iter()
            .map(|scenario| SeriesInfo {
                key: scenario.key.clone(),
                label: scenario.label.clone(),
            })
            .collect()
    }

    fn reduce(&self, point: &BaselinePoint) -> Vec<FloatValue> {
        self.scenarios
            .iter()
            .map(|scenario| scenario_adjusted_value(point, scenario, &self.adjustments))
            .collect()
    }
}
