//! Scenario adjustment under the advanced settings.

use super::{engine, point};
use crate::engine::ScenarioAdjustments;
use crate::scenario::ScenarioCategory;
use crate::settings::{
    ANNUAL_INFECTION_RATE, DALY_WEIGHT_MODERATE, FAR_UVC_EFFECTIVENESS_MULTIPLIER,
    HEPA_EFFECTIVENESS_MULTIPLIER, INDOOR_AIR_TRANSMISSION_PERCENT,
};
use is_close::is_close;

#[test]
fn defaults_leave_factor_unchanged() {
    let engine = engine();
    let selection = engine.default_selection();
    let at = point(2025, 1_360_000.0);
    let value = engine.scenario_adjusted_value(&selection, "hepa-all-public", &at);
    assert_eq!(value, Some(854_080.0));

    let adjustments = engine.adjustments(&selection);
    assert_eq!(adjustments, ScenarioAdjustments::default());
}

#[test]
fn baseline_scenario_matches_baseline() {
    let engine = engine();
    let selection = engine.default_selection();
    assert_eq!(
        engine.scenario_adjusted_value(&selection, "baseline", &point(2030, 1_229_468.0)),
        Some(1_229_468.0)
    );
}

#[test]
fn infection_rate_scales_baseline() {
    let engine = engine();
    let selection = engine.default_selection().with_advanced_setting(
        engine.settings(),
        ANNUAL_INFECTION_RATE,
        14.5,
    );

    let at = point(2025, 1_360_000.0);
    assert_eq!(
        engine.scenario_adjusted_value(&selection, "baseline", &at),
        Some(680_000.0)
    );
    assert_eq!(
        engine.scenario_adjusted_value(&selection, "hepa-all-public", &at),
        Some(427_040.0)
    );
}

#[test]
fn daly_weight_uses_weighted_average() {
    let engine = engine();
    // 0.7 * 0.1 + 0.3 * 0.8 = 0.31 against a default of 0.19
    let selection = engine.default_selection().with_advanced_setting(
        engine.settings(),
        DALY_WEIGHT_MODERATE,
        0.8,
    );
    let adjustments = engine.adjustments(&selection);
    assert!(is_close!(adjustments.daly_weight_ratio, 0.31 / 0.19));
}

#[test]
fn indoor_air_share_scales_nonzero_factors_only() {
    let engine = engine();
    let selection = engine.default_selection().with_advanced_setting(
        engine.settings(),
        INDOOR_AIR_TRANSMISSION_PERCENT,
        30.0,
    );
    let at = point(2025, 1_360_000.0);

    assert_eq!(
        engine.scenario_adjusted_value(&selection, "hepa-all-public", &at),
        Some(1_107_040.0)
    );
    assert_eq!(
        engine.scenario_adjusted_value(&selection, "baseline", &at),
        Some(1_360_000.0)
    );
}

#[test]
fn technology_multiplier_only_affects_its_category() {
    let engine = engine();
    let selection = engine.default_selection().with_advanced_setting(
        engine.settings(),
        FAR_UVC_EFFECTIVENESS_MULTIPLIER,
        1.5,
    );
    let at = point(2025, 1_360_000.0);

    assert_eq!(
        engine.scenario_adjusted_value(&selection, "far-uvc-all-public", &at),
        Some(356_320.0)
    );
    assert_eq!(
        engine.scenario_adjusted_value(&selection, "hepa-all-public", &at),
        Some(854_080.0)
    );
}

#[test]
fn final_factor_is_clamped() {
    let engine = engine();
    let registry = engine.settings();
    let selection = engine
        .default_selection()
        .with_advanced_setting(registry, FAR_UVC_EFFECTIVENESS_MULTIPLIER, 1.5)
        .with_advanced_setting(registry, INDOOR_AIR_TRANSMISSION_PERCENT, 100.0);

    let adjustments = engine.adjustments(&selection);
    assert_eq!(adjustments.reduction_factor(0.492, ScenarioCategory::FarUvc), 1.0);
    let at = point(2025, 1_360_000.0);
    assert_eq!(
        engine.scenario_adjusted_value(&selection, "far-uvc-all-public", &at),
        Some(0.0)
    );
}

#[test]
fn reset_restores_defaults() {
    let engine = engine();
    let registry = engine.settings();
    let mut selection = engine
        .default_selection()
        .with_advanced_setting(registry, HEPA_EFFECTIVENESS_MULTIPLIER, 0.5)
        .with_advanced_setting(registry, ANNUAL_INFECTION_RATE, 40.0);

    selection.reset_advanced_settings(registry);
    let once = selection.clone();
    selection.reset_advanced_settings(registry);

    assert_eq!(selection, once);
    assert_eq!(selection.advanced_settings, registry.defaults());
}

#[test]
fn unknown_scenario_has_no_value() {
    let engine = engine();
    let selection = engine.default_selection();
    assert_eq!(
        engine.scenario_adjusted_value(&selection, "ghost", &point(2025, 1_360_000.0)),
        None
    );
}
