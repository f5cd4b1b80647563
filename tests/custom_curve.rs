//! Reduction curves defined outside the core crate can be loaded from TOML.

use lcdalys::config::CatalogConfig;
use lcdalys::engine::CUMULATIVE_SERIES_KEY;
use lcdalys::intervention::ReductionCurve;
use lcdalys::period::Period;
use serde::{Deserialize, Serialize};

/// No effect until a coverage threshold is reached, then the full effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ThresholdReduction {
    threshold: f64,
    max_reduction: f64,
}

#[typetag::serde(name = "threshold")]
impl ReductionCurve for ThresholdReduction {
    fn reduction_at(&self, t: f64) -> f64 {
        if t >= self.threshold {
            self.max_reduction
        } else {
            0.0
        }
    }
}

const DOCUMENT: &str = r#"
[baseline]
end_year = 2029

[[interventions]]
key = "herdMasking"
group = "masking"
label = "Masking above a coverage threshold"
min = 0.0
max = 100.0
step = 10.0
default_value = 0.0
curve = { type = "threshold", threshold = 0.7, max_reduction = 0.3 }
"#;

#[test]
fn test_threshold_curve_from_config() {
    let config = CatalogConfig::from_toml_str(DOCUMENT).unwrap();
    let engine = config.build_engine().unwrap();
    let baseline = config.baseline();

    let below = engine.default_selection().with_intervention("herdMasking", 60.0);
    let above = engine.default_selection().with_intervention("herdMasking", 80.0);

    assert_eq!(engine.cumulative_reduction(&below), 0.0);
    assert_eq!(engine.cumulative_reduction(&above), 0.3);

    let projection = engine.project(&baseline, &above);
    assert_eq!(
        projection.value(Period::year(2025), CUMULATIVE_SERIES_KEY),
        Some(952_000.0)
    );
}

#[test]
fn test_curve_survives_round_trip() {
    let config = CatalogConfig::from_toml_str(DOCUMENT).unwrap();
    let serialised = config.to_toml_string().unwrap();
    assert!(serialised.contains("threshold"));

    let reloaded = CatalogConfig::from_toml_str(&serialised).unwrap();
    let curve = &reloaded.interventions[0].curve;
    assert_eq!(curve.reduction_at(0.5), 0.0);
    assert_eq!(curve.max_reduction(), 0.3);
}
