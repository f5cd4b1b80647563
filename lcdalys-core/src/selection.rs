//! Immutable snapshot of the user's selection.
//!
//! The presentation layer owns the mutable UI state. Whenever a checkbox or
//! slider changes it hands the engine a fresh [`SelectionState`]; the engine
//! recomputes everything from that snapshot.
//!
//! Snapshots serialise with serde so a shared link can carry them. Keys in a
//! decoded snapshot may refer to interventions, scenarios or settings that no
//! longer exist; the engine ignores those.

use crate::intervention::InterventionCatalog;
use crate::period::Period;
use crate::settings::{AdvancedSettingValues, AdvancedSettingsRegistry};
use crate::timeseries::FloatValue;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::debug;

/// First year shown by the default time window.
pub const DEFAULT_START_YEAR: i32 = 2025;

/// Which family of computation the snapshot asks for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Continuous interventions, composed per [`CompositionMode`]
    #[default]
    Interventions,
    /// Discrete scenario presets adjusted by the advanced settings
    Scenarios,
}

/// How several active interventions combine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompositionMode {
    /// Contributions are summed (capped at 1) into a single series
    #[default]
    Cumulative,
    /// Each active intervention is its own counterfactual series
    Comparative,
}

/// Selected scenario(s).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioSelection {
    /// Exactly one scenario, as picked from a dropdown
    Single(String),
    /// Any subset of scenarios, in the order they were ticked
    Checklist(Vec<String>),
}

impl Default for ScenarioSelection {
    fn default() -> Self {
        ScenarioSelection::Checklist(Vec::new())
    }
}

impl ScenarioSelection {
    /// Selected keys in selection order, without duplicates.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            ScenarioSelection::Single(key) => vec![key.as_str()],
            ScenarioSelection::Checklist(keys) => {
                let mut seen = HashSet::new();
                keys.iter()
                    .map(String::as_str)
                    .filter(|key| seen.insert(*key))
                    .collect()
            }
        }
    }

    pub fn is_checklist(&self) -> bool {
        matches!(self, ScenarioSelection::Checklist(_))
    }
}

/// Preset chart ranges, counted in whole years from the start of the window.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "5y")]
    FiveYears,
    #[serde(rename = "10y")]
    TenYears,
    #[serde(rename = "25y")]
    TwentyFiveYears,
    #[serde(rename = "50y")]
    FiftyYears,
    #[serde(rename = "100y")]
    HundredYears,
}

impl TimeRange {
    pub fn years(&self) -> i32 {
        match self {
            TimeRange::FiveYears => 5,
            TimeRange::TenYears => 10,
            TimeRange::TwentyFiveYears => 25,
            TimeRange::FiftyYears => 50,
            TimeRange::HundredYears => 100,
        }
    }

    /// Inclusive window covering `years()` yearly points from `start`.
    ///
    /// The end saturates at the last representable year.
    pub fn window_from(&self, start: Period) -> TimeWindow {
        TimeWindow::new(start, start.add_years(self.years() - 1))
    }
}

/// Inclusive range of periods to project.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: Period,
    pub end: Period,
}

impl Default for TimeWindow {
    fn default() -> Self {
        TimeRange::default().window_from(Period::year(DEFAULT_START_YEAR))
    }
}

impl TimeWindow {
    pub fn new(start: Period, end: Period) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, period: Period) -> bool {
        self.start <= period && period <= self.end
    }

    /// A window whose end precedes its start selects nothing.
    pub fn is_degenerate(&self) -> bool {
        self.start > self.end
    }
}

/// Everything the engine needs from the presentation layer for one computation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionState {
    pub mode: Mode,
    pub composition_mode: CompositionMode,
    pub enabled_interventions: BTreeSet<String>,
    /// Slider positions; kept when an intervention is disabled
    pub intervention_intensity: BTreeMap<String, FloatValue>,
    pub scenarios: ScenarioSelection,
    pub advanced_settings: AdvancedSettingValues,
    pub window: TimeWindow,
}

impl SelectionState {
    /// Startup state: nothing enabled, sliders and settings at their defaults.
    pub fn new(interventions: &InterventionCatalog, settings: &AdvancedSettingsRegistry) -> Self {
        Self {
            intervention_intensity: interventions.default_intensities(),
            advanced_settings: settings.defaults(),
            ..Default::default()
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_composition_mode(mut self, composition_mode: CompositionMode) -> Self {
        self.composition_mode = composition_mode;
        self
    }

    pub fn with_window(mut self, window: TimeWindow) -> Self {
        self.window = window;
        self
    }

    pub fn with_scenarios(mut self, scenarios: ScenarioSelection) -> Self {
        self.scenarios = scenarios;
        self
    }

    /// Enable an intervention and move its slider.
    pub fn with_intervention(mut self, key: &str, intensity: FloatValue) -> Self {
        self.enabled_interventions.insert(key.to_string());
        self.intervention_intensity.insert(key.to_string(), intensity);
        self
    }

    pub fn with_advanced_setting(
        mut self,
        registry: &AdvancedSettingsRegistry,
        key: &str,
        value: FloatValue,
    ) -> Self {
        self.advanced_settings.set(registry, key, value);
        self
    }

    /// Tick or untick an intervention. The slider position survives.
    pub fn set_enabled(&mut self, key: &str, enabled: bool) {
        if enabled {
            self.enabled_interventions.insert(key.to_string());
        } else {
            self.enabled_interventions.remove(key);
        }
    }

    /// Move a slider, clamping into the intervention's bounds.
    ///
    /// Keys missing from the catalog are ignored.
    pub fn set_intensity(&mut self, catalog: &InterventionCatalog, key: &str, value: FloatValue) {
        match catalog.get(key) {
            Some(intervention) => {
                self.intervention_intensity
                    .insert(key.to_string(), intervention.clamp_intensity(value));
            }
            None => debug!(key = %key, "Ignoring intensity for unknown intervention"),
        }
    }

    pub fn reset_advanced_settings(&mut self, registry: &AdvancedSettingsRegistry) {
        self.advanced_settings.reset(registry);
    }

    /// Clear every ticked scenario.
    pub fn reset_scenarios(&mut self) {
        self.scenarios = ScenarioSelection::default();
    }
}
