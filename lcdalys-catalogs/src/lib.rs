//! Built-in catalogs for lcdalys.
//!
//! The interventions, scenarios and advanced settings of the Long COVID DALY
//! projection, together with the default baseline trajectory. Use
//! [`default_engine`] for a ready engine, or [`default_config`] as a starting
//! point for a customised TOML configuration.

pub mod advanced_settings;
pub mod interventions;
pub mod scenarios;

use lcdalys_core::config::CatalogConfig;
use lcdalys_core::engine::ReductionEngine;
use lcdalys_core::errors::DalyResult;
use lcdalys_core::timeseries::{BaselineParameters, BaselineSeries};

pub use advanced_settings::advanced_settings;
pub use interventions::{group_labels, interventions, GROUP_LABELS};
pub use scenarios::scenarios;

/// The complete built-in configuration.
pub fn default_config() -> CatalogConfig {
    CatalogConfig {
        baseline: BaselineParameters::default(),
        group_labels: group_labels(),
        interventions: interventions(),
        scenarios: scenarios(),
        advanced_settings: advanced_settings(),
    }
}

/// Engine over the built-in catalogs.
pub fn default_engine() -> DalyResult<ReductionEngine> {
    default_config().build_engine()
}

/// 2025 to 2125, starting from 17 million cases at 80 DALYs per 1,000 cases.
pub fn default_baseline() -> BaselineSeries {
    BaselineParameters::default().generate()
}
