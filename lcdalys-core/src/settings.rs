//! Advanced settings: continuous model-assumption parameters.
//!
//! Each setting is a bounded numeric knob with a documented default. The
//! reduction engine only ever uses settings as ratios against their default
//! (`current / default`), so a setting left at its default has no effect.

use crate::bounds::{clamp_into, validate_bounds};
use crate::errors::{DalyError, DalyResult};
use crate::timeseries::FloatValue;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Percentage of the population infected each year.
pub const ANNUAL_INFECTION_RATE: &str = "annualInfectionRate";
/// Percentage of infections converting into Long COVID.
pub const LONG_COVID_CONVERSION_RATE: &str = "longCovidConversionRate";
/// DALYs lost per year for less severe Long COVID.
pub const DALY_WEIGHT_LESS_SEVERE: &str = "dalyWeightLessSevere";
/// DALYs lost per year for moderate Long COVID.
pub const DALY_WEIGHT_MODERATE: &str = "dalyWeightModerate";
/// Percentage of infections transmitted through shared indoor air.
pub const INDOOR_AIR_TRANSMISSION_PERCENT: &str = "indoorAirTransmissionPercent";
/// Multiplier on the effectiveness of HEPA filtration.
pub const HEPA_EFFECTIVENESS_MULTIPLIER: &str = "hepaEffectivenessMultiplier";
/// Multiplier on the effectiveness of far-UVC.
pub const FAR_UVC_EFFECTIVENESS_MULTIPLIER: &str = "farUvcEffectivenessMultiplier";

/// Share of Long COVID cases that are less severe in the average DALY weight.
pub const LESS_SEVERE_SHARE: FloatValue = 0.7;
/// Share of Long COVID cases that are moderate in the average DALY weight.
pub const MODERATE_SHARE: FloatValue = 0.3;

/// A named, bounded model assumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedSetting {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub min: FloatValue,
    pub max: FloatValue,
    pub step: FloatValue,
    pub default_value: FloatValue,
    /// Display unit, e.g. `%` or `DALYs/year`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl AdvancedSetting {
    pub fn clamp(&self, value: FloatValue) -> FloatValue {
        clamp_into(&self.key, value, self.min, self.max, self.default_value)
    }
}

/// Static registry of advanced settings.
#[derive(Debug, Clone, Default)]
pub struct AdvancedSettingsRegistry {
    settings: Vec<AdvancedSetting>,
}

impl AdvancedSettingsRegistry {
    pub fn new(settings: Vec<AdvancedSetting>) -> DalyResult<Self> {
        let mut seen = HashSet::new();
        for setting in &settings {
            if !seen.insert(setting.key.as_str()) {
                return Err(DalyError::DuplicateKey {
                    kind: "advanced setting",
                    key: setting.key.clone(),
                });
            }
            validate_bounds(&setting.key, setting.min, setting.max, setting.default_value)?;
        }
        Ok(Self { settings })
    }

    pub fn get(&self, key: &str) -> Option<&AdvancedSetting> {
        self.settings.iter().find(|s| s.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AdvancedSetting> {
        self.settings.iter()
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Mapping of every key to its default value.
    pub fn defaults(&self) -> AdvancedSettingValues {
        AdvancedSettingValues(
            self.settings
                .iter()
                .map(|s| (s.key.clone(), s.default_value))
                .collect(),
        )
    }
}

/// Current value of each advanced setting.
///
/// Values are kept within bounds by [`set`](Self::set); values arriving
/// through deserialisation are clamped again whenever they are read through
/// [`resolved`](Self::resolved).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdvancedSettingValues(BTreeMap<String, FloatValue>);

impl AdvancedSettingValues {
    pub fn defaults(registry: &AdvancedSettingsRegistry) -> Self {
        registry.defaults()
    }

    /// Update one setting, clamping into its bounds.
    ///
    /// Keys missing from the registry are ignored.
    pub fn set(&mut self, registry: &AdvancedSettingsRegistry, key: &str, value: FloatValue) {
        match registry.get(key) {
            Some(setting) => {
                self.0.insert(key.to_string(), setting.clamp(value));
            }
            None => debug!(key = %key, "Ignoring unknown advanced setting"),
        }
    }

    /// Restore every setting to its default, dropping unknown keys.
    pub fn reset(&mut self, registry: &AdvancedSettingsRegistry) {
        *self = registry.defaults();
    }

    /// Raw stored value.
    pub fn get(&self, key: &str) -> Option<FloatValue> {
        self.0.get(key).copied()
    }

    /// Stored value (or the default when absent), clamped into bounds.
    ///
    /// `None` when the registry has no such setting.
    pub fn resolved(&self, registry: &AdvancedSettingsRegistry, key: &str) -> Option<FloatValue> {
        let setting = registry.get(key)?;
        Some(
            self.get(key)
                .map(|v| setting.clamp(v))
                .unwrap_or(setting.default_value),
        )
    }

    /// `current / default` for a setting.
    ///
    /// Exactly 1 at the default; also 1 for unknown settings and zero defaults.
    pub fn ratio(&self, registry: &AdvancedSettingsRegistry, key: &str) -> FloatValue {
        match (registry.get(key), self.resolved(registry, key)) {
            (Some(setting), Some(current)) if setting.default_value != 0.0 => {
                current / setting.default_value
            }
            _ => 1.0,
        }
    }

    /// Blend of the less severe and moderate DALY weights.
    ///
    /// `None` unless both weights exist in the registry.
    pub fn average_daly_weight(&self, registry: &AdvancedSettingsRegistry) -> Option<FloatValue> {
        let less_severe = self.resolved(registry, DALY_WEIGHT_LESS_SEVERE)?;
        let moderate = self.resolved(registry, DALY_WEIGHT_MODERATE)?;
        Some(average_weight(less_severe, moderate))
    }

    /// Ratio of the current average DALY weight to the default average.
    pub fn average_daly_weight_ratio(&self, registry: &AdvancedSettingsRegistry) -> FloatValue {
        let current = self.average_daly_weight(registry);
        let default = registry.defaults().average_daly_weight(registry);
        match (current, default) {
            (Some(current), Some(default)) if default != 0.0 => current / default,
            _ => 1.0,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FloatValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

fn average_weight(less_severe: FloatValue, moderate: FloatValue) -> FloatValue {
    LESS_SEVERE_SHARE * less_severe + MODERATE_SHARE * moderate
}
