//! Built-in intervention catalog.
//!
//! Every intervention uses a [`LinearReduction`]: the share of the
//! population (or of buildings) covered, scaled by the fraction of Long
//! COVID burden removed at full coverage.

use lcdalys_core::intervention::{Intervention, LinearReduction};
use lcdalys_core::timeseries::FloatValue;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Display names of the intervention groups.
pub const GROUP_LABELS: [(&str, &str); 5] = [
    ("air", "Air Quality improvements"),
    ("masking", "Masking"),
    ("vaccination", "Vaccination"),
    ("publicHealth", "Public Health Policies"),
    ("pharma", "Pharmaceutical Interventions"),
];

pub fn group_labels() -> BTreeMap<String, String> {
    GROUP_LABELS
        .iter()
        .map(|(id, label)| (id.to_string(), label.to_string()))
        .collect()
}

/// A percentage-coverage slider from 0 to `max` starting at 0.
fn coverage(
    key: &str,
    group: &str,
    label: &str,
    sub_label: &str,
    max: FloatValue,
    step: FloatValue,
    max_reduction: FloatValue,
) -> Intervention {
    Intervention {
        key: key.to_string(),
        group: group.to_string(),
        label: label.to_string(),
        sub_label: sub_label.to_string(),
        min: 0.0,
        max,
        step,
        default_value: 0.0,
        curve: Arc::new(LinearReduction::new(max_reduction)),
    }
}

/// Interventions in display order.
pub fn interventions() -> Vec<Intervention> {
    vec![
        coverage(
            "airExchangeRate",
            "air",
            "Air changes per hour (ACH)",
            "Percentage of buildings with a minimum of 5 ACH",
            100.0,
            5.0,
            0.1,
        ),
        coverage(
            "UVC",
            "air",
            "Far germicidal UVC",
            "Percentage of buildings with far germicidal UVC",
            100.0,
            5.0,
            0.1,
        ),
        coverage(
            "masksHealthcare",
            "masking",
            "Masking in healthcare facilities",
            "Percentage of healthcare facilities with mask mandates",
            100.0,
            5.0,
            0.1,
        ),
        coverage(
            "masksGeneral",
            "masking",
            "Masking in general population",
            "Percentage of general population wearing masks",
            100.0,
            5.0,
            0.1,
        ),
        coverage(
            "sickLeave",
            "publicHealth",
            "Paid sick leave",
            "Percentage of workers with paid sick leave",
            52.0,
            1.0,
            0.05,
        ),
        coverage(
            "testing",
            "publicHealth",
            "Free COVID tests",
            "Percentage of population with free COVID tests available to them",
            100.0,
            5.0,
            0.1,
        ),
        coverage(
            "vaccinationCurrent",
            "vaccination",
            "Vaccination coverage: current vaccines",
            "Percentage of population with up-to-date vaccination for current variants",
            100.0,
            5.0,
            0.2,
        ),
        coverage(
            "vaccinationImproved",
            "vaccination",
            "Vaccination coverage: hypothetical improved vaccine for long COVID prevention",
            "Percentage of population with hypothetical improved vaccine for long COVID prevention",
            100.0,
            5.0,
            0.3,
        ),
        coverage(
            "nasalSprays",
            "pharma",
            "Pharmaceutical intervention: nasal sprays",
            "Percentage of population using COVID preventative nasal sprays",
            100.0,
            5.0,
            0.15,
        ),
        coverage(
            "paxlovid",
            "pharma",
            "Pharmaceutical intervention: Paxlovid",
            "Percentage of population taking Paxlovid during acute COVID",
            100.0,
            5.0,
            0.1,
        ),
        coverage(
            "metformin",
            "pharma",
            "Pharmaceutical intervention: metformin",
            "Percentage of population taking Metformin during acute COVID",
            100.0,
            5.0,
            0.1,
        ),
        coverage(
            "reduceSymptoms",
            "pharma",
            "Pharmaceutical intervention: reduction of long covid symptoms",
            "Percentage of population taking pharmaceuticals that reduce long covid symptoms",
            100.0,
            5.0,
            0.2,
        ),
    ]
}
