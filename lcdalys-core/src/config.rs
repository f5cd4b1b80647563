//! Catalog configuration.
//!
//! Everything the engine computes against can be described in one TOML
//! document:
//!
//! ```toml
//! [baseline]
//! start_year = 2025
//! end_year = 2125
//!
//! [group_labels]
//! air = "Air Quality improvements"
//!
//! [[interventions]]
//! key = "UVC"
//! group = "air"
//! label = "Far germicidal UVC"
//! min = 0.0
//! max = 100.0
//! step = 5.0
//! default_value = 0.0
//! curve = { type = "linear", max_reduction = 0.1 }
//!
//! [[scenarios]]
//! key = "hepa-schools"
//! label = "HEPA filters in all schools"
//! category = "hepa"
//! reduction_factor = 0.0969
//!
//! [[advanced_settings]]
//! key = "annualInfectionRate"
//! label = "Annual infection rate"
//! min = 10.0
//! max = 50.0
//! step = 1.0
//! default_value = 29.0
//! ```
//!
//! Every section is optional. Loading validates the catalogs the same way
//! their constructors do, so a loaded configuration always builds an engine.

use crate::engine::ReductionEngine;
use crate::errors::DalyResult;
use crate::intervention::{Intervention, InterventionCatalog};
use crate::scenario::{Scenario, ScenarioCatalog};
use crate::settings::{AdvancedSetting, AdvancedSettingsRegistry};
use crate::timeseries::{BaselineParameters, BaselineSeries};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub baseline: BaselineParameters,
    /// Display names of intervention groups
    pub group_labels: BTreeMap<String, String>,
    pub interventions: Vec<Intervention>,
    pub scenarios: Vec<Scenario>,
    pub advanced_settings: Vec<AdvancedSetting>,
}

impl CatalogConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(document: &str) -> DalyResult<Self> {
        let config: CatalogConfig = toml::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> DalyResult<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> DalyResult<()> {
        self.build_engine().map(|_| ())
    }

    /// Build validated catalogs and an engine over them.
    pub fn build_engine(&self) -> DalyResult<ReductionEngine> {
        let interventions =
            InterventionCatalog::new(self.interventions.clone(), self.group_labels.clone())?;
        let scenarios = ScenarioCatalog::new(self.scenarios.clone())?;
        let settings = AdvancedSettingsRegistry::new(self.advanced_settings.clone())?;
        Ok(ReductionEngine::new(interventions, scenarios, settings))
    }

    /// Baseline generated from the `[baseline]` section.
    pub fn baseline(&self) -> BaselineSeries {
        self.baseline.generate()
    }
}
