//! Discrete named scenarios and the scenario catalog.
//!
//! A scenario bundles one or more interventions into a single precomputed
//! effect: either a constant reduction factor, per-period burden values, or
//! both (values take precedence for the periods they cover).

use crate::errors::{DalyError, DalyResult};
use crate::period::Period;
use crate::settings::{FAR_UVC_EFFECTIVENESS_MULTIPLIER, HEPA_EFFECTIVENESS_MULTIPLIER};
use crate::timeseries::{BaselinePoint, FloatValue};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Technology family of a scenario.
///
/// Filtration technologies have an effectiveness multiplier among the
/// advanced settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioCategory {
    /// No intervention
    Baseline,
    /// HEPA filtration
    Hepa,
    /// Far germicidal UVC
    FarUvc,
    #[default]
    Other,
}

impl ScenarioCategory {
    /// Advanced setting scaling the effectiveness of this technology, if any.
    pub fn multiplier_setting(&self) -> Option<&'static str> {
        match self {
            ScenarioCategory::Hepa => Some(HEPA_EFFECTIVENESS_MULTIPLIER),
            ScenarioCategory::FarUvc => Some(FAR_UVC_EFFECTIVENESS_MULTIPLIER),
            ScenarioCategory::Baseline | ScenarioCategory::Other => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: ScenarioCategory,
    /// Display grouping, e.g. the setting the intervention applies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Fractional reduction from baseline, in `[0, 1]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduction_factor: Option<FloatValue>,
    /// Precomputed burden per period
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<Period, FloatValue>,
    /// Reference burden: DALYs per 1,000 people over 10 years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dalys_per_1000: Option<FloatValue>,
}

impl Scenario {
    /// Reduction factor before any advanced-setting adjustment.
    ///
    /// A precomputed value for the point's period is converted into the
    /// equivalent factor `1 - value / baseline`; otherwise the constant
    /// factor applies, and a scenario with neither leaves burden unchanged.
    pub fn base_reduction_factor(&self, point: &BaselinePoint) -> FloatValue {
        match self.values.get(&point.period) {
            Some(value) if point.value > 0.0 => 1.0 - value / point.value,
            Some(_) => 0.0,
            None => self.reduction_factor.unwrap_or(0.0),
        }
    }

    pub fn validate(&self) -> DalyResult<()> {
        if let Some(factor) = self.reduction_factor {
            if !(0.0..=1.0).contains(&factor) {
                return Err(DalyError::InvalidReductionFactor {
                    key: self.key.clone(),
                    value: factor,
                });
            }
        }
        for (period, value) in &self.values {
            if !value.is_finite() || *value < 0.0 {
                return Err(DalyError::InvalidBaselineValue {
                    period: period.to_string(),
                    value: *value,
                });
            }
        }
        if self.category != ScenarioCategory::Baseline
            && self.reduction_factor.is_none()
            && self.values.is_empty()
        {
            return Err(DalyError::EmptyScenario(self.key.clone()));
        }
        Ok(())
    }
}

/// Scenarios sharing a display group, in catalog order.
#[derive(Debug, Clone)]
pub struct ScenarioGroup<'a> {
    pub id: Option<&'a str>,
    pub scenarios: Vec<&'a Scenario>,
}

/// Static registry of scenarios keyed by `key`.
#[derive(Debug, Clone, Default)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    pub fn new(scenarios: Vec<Scenario>) -> DalyResult<Self> {
        let mut seen = HashSet::new();
        for scenario in &scenarios {
            if !seen.insert(scenario.key.as_str()) {
                return Err(DalyError::DuplicateKey {
                    kind: "scenario",
                    key: scenario.key.clone(),
                });
            }
            scenario.validate()?;
        }
        Ok(Self { scenarios })
    }

    pub fn get(&self, key: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.key == key)
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Scenario> + ExactSizeIterator {
        self.scenarios.iter()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// The scenario selected when nothing else is: the first in the catalog.
    pub fn default_scenario(&self) -> Option<&Scenario> {
        self.scenarios.first()
    }

    /// Scenarios grouped by display group, groups ordered by first appearance.
    pub fn grouped(&self) -> Vec<ScenarioGroup<'_>> {
        let mut groups: Vec<ScenarioGroup<'_>> = Vec::new();
        for scenario in &self.scenarios {
            let id = scenario.group.as_deref();
            match groups.iter_mut().find(|g| g.id == id) {
                Some(group) => group.scenarios.push(scenario),
                None => groups.push(ScenarioGroup {
                    id,
                    scenarios: vec![scenario],
                }),
            }
        }
        groups
    }
}
