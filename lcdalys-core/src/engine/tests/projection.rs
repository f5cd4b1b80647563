//! End-to-end projections through [`ReductionEngine::project`].

use super::{baseline, engine};
use crate::engine::{ReductionEngine, CUMULATIVE_SERIES_KEY};
use crate::intervention::InterventionCatalog;
use crate::period::Period;
use crate::scenario::tests::scenario;
use crate::scenario::{ScenarioCatalog, ScenarioCategory};
use crate::selection::{CompositionMode, Mode, ScenarioSelection, TimeRange};
use crate::settings::tests::registry;
use crate::settings::HEPA_EFFECTIVENESS_MULTIPLIER;

fn checklist(keys: &[&str]) -> ScenarioSelection {
    ScenarioSelection::Checklist(keys.iter().map(|k| k.to_string()).collect())
}

#[test]
fn default_window_covers_five_years() {
    let engine = engine();
    let projection = engine.project(&baseline(), &engine.default_selection());

    assert_eq!(projection.len(), 5);
    assert_eq!(projection.points[0].period, Period::year(2025));
    assert_eq!(projection.points[4].period, Period::year(2029));
    assert_eq!(projection.points[0].baseline, 1_360_000.0);
    assert_eq!(projection.points[1].baseline, 1_332_800.0);
}

#[test]
fn neutral_selection_reproduces_baseline() {
    let engine = engine();
    let selection = engine
        .default_selection()
        .with_window(TimeRange::HundredYears.window_from(Period::year(2025)));
    let projection = engine.project(&baseline(), &selection);

    assert_eq!(projection.series_keys(), [CUMULATIVE_SERIES_KEY]);
    for point in &projection.points {
        assert_eq!(point.values, vec![point.baseline]);
    }
}

#[test]
fn projection_is_deterministic() {
    let engine = engine();
    let selection = engine
        .default_selection()
        .with_intervention("filters", 35.0)
        .with_window(TimeRange::FiftyYears.window_from(Period::year(2030)));
    let series = baseline();

    assert_eq!(
        engine.project(&series, &selection),
        engine.project(&series, &selection)
    );
}

#[test]
fn time_range_limits_points() {
    let engine = engine();
    for (range, expected) in [
        (TimeRange::FiveYears, 5),
        (TimeRange::TenYears, 10),
        (TimeRange::TwentyFiveYears, 25),
        (TimeRange::FiftyYears, 50),
        (TimeRange::HundredYears, 100),
    ] {
        let selection = engine
            .default_selection()
            .with_window(range.window_from(Period::year(2025)));
        assert_eq!(engine.project(&baseline(), &selection).len(), expected);
    }
}

#[test]
fn window_past_data_is_empty() {
    let engine = engine();
    let selection = engine
        .default_selection()
        .with_window(TimeRange::TenYears.window_from(Period::year(2200)));
    let projection = engine.project(&baseline(), &selection);
    assert!(projection.is_empty());
    assert_eq!(projection.series_keys(), [CUMULATIVE_SERIES_KEY]);
}

#[test]
fn comparative_series_follow_catalog_order() {
    let engine = engine();
    let selection = engine
        .default_selection()
        .with_composition_mode(CompositionMode::Comparative)
        .with_intervention("vaccines", 100.0)
        .with_intervention("filters", 100.0);
    let projection = engine.project(&baseline(), &selection);

    assert_eq!(projection.series_keys(), ["filters", "vaccines"]);
    assert_eq!(
        projection.value(Period::year(2025), "vaccines"),
        Some(1_088_000.0)
    );
}

#[test]
fn checklist_is_ordered_by_burden() {
    let engine = engine();
    let selection = engine
        .default_selection()
        .with_mode(Mode::Scenarios)
        .with_scenarios(ScenarioSelection::Checklist(vec![
            "far-uvc-all-public".to_string(),
            "baseline".to_string(),
            "hepa-schools".to_string(),
        ]));
    let projection = engine.project(&baseline(), &selection);

    assert_eq!(
        projection.series_keys(),
        ["baseline", "hepa-schools", "far-uvc-all-public"]
    );
}

#[test]
fn checklist_order_follows_effectiveness_multiplier() {
    let engine = engine();
    let selection = engine
        .default_selection()
        .with_mode(Mode::Scenarios)
        .with_scenarios(checklist(&["hepa-schools", "far-uvc-schools"]));
    let projection = engine.project(&baseline(), &selection);
    assert_eq!(projection.series_keys(), ["hepa-schools", "far-uvc-schools"]);

    // 0.0969 * 1.5 overtakes 0.124, so HEPA now leaves the smaller burden
    let boosted = selection.with_advanced_setting(
        engine.settings(),
        HEPA_EFFECTIVENESS_MULTIPLIER,
        1.5,
    );
    let projection = engine.project(&baseline(), &boosted);
    assert_eq!(projection.series_keys(), ["far-uvc-schools", "hepa-schools"]);
}

#[test]
fn checklist_ties_keep_selection_order() {
    let scenarios = ScenarioCatalog::new(vec![
        scenario("a", ScenarioCategory::Other, 0.2),
        scenario("b", ScenarioCategory::Other, 0.2),
        scenario("c", ScenarioCategory::Other, 0.1),
    ])
    .unwrap();
    let engine = ReductionEngine::new(InterventionCatalog::default(), scenarios, registry());
    let selection = engine.default_selection().with_mode(Mode::Scenarios);

    let projection = engine.project(
        &baseline(),
        &selection.clone().with_scenarios(checklist(&["b", "a", "c"])),
    );
    assert_eq!(projection.series_keys(), ["c", "b", "a"]);

    let projection =
        engine.project(&baseline(), &selection.with_scenarios(checklist(&["a", "b"])));
    assert_eq!(projection.series_keys(), ["a", "b"]);
}

#[test]
fn single_scenario_keeps_one_series() {
    let engine = engine();
    let selection = engine
        .default_selection()
        .with_mode(Mode::Scenarios)
        .with_scenarios(ScenarioSelection::Single("hepa-all-public".to_string()));
    let projection = engine.project(&baseline(), &selection);

    assert_eq!(projection.series_keys(), ["hepa-all-public"]);
    assert_eq!(
        projection.value(Period::year(2025), "hepa-all-public"),
        Some(854_080.0)
    );
}

#[test]
fn unknown_scenarios_are_dropped() {
    let engine = engine();
    let selection = engine
        .default_selection()
        .with_mode(Mode::Scenarios)
        .with_scenarios(ScenarioSelection::Checklist(vec![
            "ghost".to_string(),
            "baseline".to_string(),
        ]));
    let projection = engine.project(&baseline(), &selection);
    assert_eq!(projection.series_keys(), ["baseline"]);
    assert_eq!(projection.len(), 5);
}

#[test]
fn empty_engine_projects_baseline_only() {
    let engine = ReductionEngine::default();
    let selection = engine
        .default_selection()
        .with_mode(Mode::Scenarios)
        .with_scenarios(ScenarioSelection::Single("baseline".to_string()));
    let projection = engine.project(&baseline(), &selection);

    assert!(projection.series.is_empty());
    assert_eq!(projection.len(), 5);
    assert!(projection.points.iter().all(|p| p.values.is_empty()));
}
