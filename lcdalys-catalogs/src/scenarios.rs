//! Built-in scenario catalog: air cleaning technologies in two settings.
//!
//! Reduction factors are `(baseline - scenario) / baseline` of the modelled
//! DALYs per 1,000 people over 10 years.

use lcdalys_core::scenario::{Scenario, ScenarioCategory};
use lcdalys_core::timeseries::FloatValue;
use std::collections::BTreeMap;

pub const SCHOOLS_GROUP: &str = "schools";
pub const ALL_PUBLIC_GROUP: &str = "all-public";

fn scenario(
    key: &str,
    label: &str,
    description: &str,
    category: ScenarioCategory,
    group: Option<&str>,
    reduction_factor: FloatValue,
    dalys_per_1000: FloatValue,
) -> Scenario {
    Scenario {
        key: key.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        category,
        group: group.map(str::to_string),
        reduction_factor: Some(reduction_factor),
        values: BTreeMap::new(),
        dalys_per_1000: Some(dalys_per_1000),
    }
}

/// Scenarios in display order. The first is the default selection.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        scenario(
            "baseline",
            "Baseline",
            "No air cleaning intervention. ~29% of population infected annually.",
            ScenarioCategory::Baseline,
            None,
            0.0,
            258.0,
        ),
        scenario(
            "hepa-schools",
            "HEPA schools and daycares",
            "HEPA filters implemented in all K-12 schools, preschools, and daycare settings.",
            ScenarioCategory::Hepa,
            Some(SCHOOLS_GROUP),
            0.0969,
            233.0,
        ),
        scenario(
            "far-uvc-schools",
            "Far UVC schools and daycares",
            "Far germicidal UV-C implemented in all K-12 schools, preschools, and daycare settings.",
            ScenarioCategory::FarUvc,
            Some(SCHOOLS_GROUP),
            0.124,
            226.0,
        ),
        scenario(
            "hepa-all-public",
            "HEPA all public indoor air",
            "HEPA filters implemented in all public indoor settings.",
            ScenarioCategory::Hepa,
            Some(ALL_PUBLIC_GROUP),
            0.372,
            162.0,
        ),
        scenario(
            "far-uvc-all-public",
            "Far UVC all public indoor air",
            "Far germicidal UV-C implemented in all public indoor settings.",
            ScenarioCategory::FarUvc,
            Some(ALL_PUBLIC_GROUP),
            0.492,
            131.0,
        ),
    ]
}
