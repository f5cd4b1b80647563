//! Engine tests.
//!
//! Shared fixtures mirror the shape of the bundled catalogs with fewer
//! entries, so the expected values can be checked by hand.

#[cfg(test)]
mod projection;
#[cfg(test)]
mod scenarios;

use super::ReductionEngine;
use crate::intervention::tests::linear;
use crate::intervention::InterventionCatalog;
use crate::period::Period;
use crate::scenario::tests::scenario;
use crate::scenario::{ScenarioCatalog, ScenarioCategory};
use crate::settings::tests::registry;
use crate::timeseries::{BaselineParameters, BaselinePoint, BaselineSeries, FloatValue};
use std::collections::BTreeMap;

pub(super) fn engine() -> ReductionEngine {
    let interventions = InterventionCatalog::new(
        vec![
            linear("filters", "air", 100.0, 0.1),
            linear("vaccines", "vaccination", 100.0, 0.2),
            linear("antivirals", "pharma", 100.0, 0.9),
        ],
        BTreeMap::new(),
    )
    .unwrap();
    let scenarios = ScenarioCatalog::new(vec![
        scenario("baseline", ScenarioCategory::Baseline, 0.0),
        scenario("hepa-schools", ScenarioCategory::Hepa, 0.0969),
        scenario("far-uvc-schools", ScenarioCategory::FarUvc, 0.124),
        scenario("hepa-all-public", ScenarioCategory::Hepa, 0.372),
        scenario("far-uvc-all-public", ScenarioCategory::FarUvc, 0.492),
    ])
    .unwrap();
    ReductionEngine::new(interventions, scenarios, registry())
}

/// 2025 to 2125 starting at 1,360,000 DALYs.
pub(super) fn baseline() -> BaselineSeries {
    BaselineParameters::default().generate()
}

pub(super) fn point(year: i32, value: FloatValue) -> BaselinePoint {
    BaselinePoint {
        period: Period::year(year),
        value,
    }
}
