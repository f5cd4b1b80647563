//! Interventions and the intervention catalog.
//!
//! An intervention is a continuously adjustable public-health measure (for
//! example the share of buildings with far-UVC). Its effect on burden is a
//! [`ReductionCurve`]: a pure function from the normalised slider position to
//! the fraction of DALYs removed.
//!
//! Curves are serialised with a `type` tag so catalogs can be loaded from
//! configuration:
//!
//! ```toml
//! [[interventions]]
//! key = "UVC"
//! group = "air"
//! label = "Far germicidal UVC"
//! min = 0.0
//! max = 100.0
//! step = 5.0
//! default_value = 0.0
//! curve = { type = "linear", max_reduction = 0.1 }
//! ```

use crate::bounds::{clamp_into, validate_bounds};
use crate::errors::{DalyError, DalyResult};
use crate::timeseries::FloatValue;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt::Debug;
use std::sync::Arc;

/// Maps a normalised intensity to the fraction of burden an intervention removes.
///
/// Implementations must be monotonic non-decreasing over `[0, 1]`, return 0
/// at `t = 0` and stay within `[0, 1]`.
#[typetag::serde(tag = "type")]
pub trait ReductionCurve: Debug + Send + Sync {
    /// Fraction removed at normalised intensity `t` in `[0, 1]`.
    fn reduction_at(&self, t: FloatValue) -> FloatValue;

    /// Fraction removed at full intensity.
    fn max_reduction(&self) -> FloatValue {
        self.reduction_at(1.0)
    }
}

/// Reduction proportional to intensity.
///
/// $$ r(t) = t \cdot r_{max} $$
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearReduction {
    /// Fraction of burden removed at full intensity
    pub max_reduction: FloatValue,
}

impl LinearReduction {
    pub fn new(max_reduction: FloatValue) -> Self {
        Self { max_reduction }
    }
}

#[typetag::serde(name = "linear")]
impl ReductionCurve for LinearReduction {
    fn reduction_at(&self, t: FloatValue) -> FloatValue {
        t * self.max_reduction
    }

    fn max_reduction(&self) -> FloatValue {
        self.max_reduction
    }
}

/// A continuously adjustable intervention with a bounded effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intervention {
    /// Unique identifier, also used in shared selection state
    pub key: String,
    /// Category id, see [`InterventionCatalog::group_label`]
    pub group: String,
    pub label: String,
    #[serde(default)]
    pub sub_label: String,
    pub min: FloatValue,
    pub max: FloatValue,
    pub step: FloatValue,
    pub default_value: FloatValue,
    pub curve: Arc<dyn ReductionCurve>,
}

impl Intervention {
    /// Clamp an intensity into `[min, max]`.
    pub fn clamp_intensity(&self, intensity: FloatValue) -> FloatValue {
        clamp_into(&self.key, intensity, self.min, self.max, self.min)
    }

    /// Position of `intensity` within the slider range, in `[0, 1]`.
    pub fn normalise(&self, intensity: FloatValue) -> FloatValue {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        (self.clamp_intensity(intensity) - self.min) / span
    }

    /// Fraction of burden removed at `intensity`.
    ///
    /// Zero at the minimum; out-of-range intensities are clamped first.
    pub fn reduction_contribution(&self, intensity: FloatValue) -> FloatValue {
        let t = self.normalise(intensity);
        if t <= 0.0 {
            return 0.0;
        }
        let reduction = self.curve.reduction_at(t);
        if reduction.is_finite() {
            reduction.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// An intervention is active when its intensity sits above the minimum.
    pub fn is_active(&self, intensity: FloatValue) -> bool {
        self.clamp_intensity(intensity) > self.min
    }

    pub fn validate(&self) -> DalyResult<()> {
        validate_bounds(&self.key, self.min, self.max, self.default_value)?;
        let max_reduction = self.curve.max_reduction();
        if !(0.0..=1.0).contains(&max_reduction) {
            return Err(DalyError::InvalidReductionFactor {
                key: self.key.clone(),
                value: max_reduction,
            });
        }
        let at_min = self.curve.reduction_at(0.0);
        if at_min != 0.0 {
            return Err(DalyError::Error(format!(
                "Reduction curve for {:?} must be zero at minimum intensity, got {}",
                self.key, at_min
            )));
        }
        Ok(())
    }
}

/// Interventions sharing a category, in catalog order.
#[derive(Debug, Clone)]
pub struct InterventionGroup<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub interventions: Vec<&'a Intervention>,
}

/// Static registry of interventions keyed by `key`.
#[derive(Debug, Clone, Default)]
pub struct InterventionCatalog {
    interventions: Vec<Intervention>,
    group_labels: BTreeMap<String, String>,
}

impl InterventionCatalog {
    /// Build a validated catalog.
    ///
    /// Keys must be unique and every intervention must have usable bounds.
    pub fn new(
        interventions: Vec<Intervention>,
        group_labels: BTreeMap<String, String>,
    ) -> DalyResult<Self> {
        let mut seen = HashSet::new();
        for intervention in &interventions {
            if !seen.insert(intervention.key.as_str()) {
                return Err(DalyError::DuplicateKey {
                    kind: "intervention",
                    key: intervention.key.clone(),
                });
            }
            intervention.validate()?;
        }
        Ok(Self {
            interventions,
            group_labels,
        })
    }

    pub fn get(&self, key: &str) -> Option<&Intervention> {
        self.interventions.iter().find(|i| i.key == key)
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Intervention> + ExactSizeIterator {
        self.interventions.iter()
    }

    pub fn len(&self) -> usize {
        self.interventions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interventions.is_empty()
    }

    /// Display label for a group id, falling back to the id itself.
    pub fn group_label<'a>(&'a self, group: &'a str) -> &'a str {
        self.group_labels
            .get(group)
            .map(String::as_str)
            .unwrap_or(group)
    }

    pub fn group_labels(&self) -> &BTreeMap<String, String> {
        &self.group_labels
    }

    /// Interventions grouped by category, groups ordered by first appearance.
    pub fn grouped(&self) -> Vec<InterventionGroup<'_>> {
        let mut groups: Vec<InterventionGroup<'_>> = Vec::new();
        for intervention in &self.interventions {
            match groups.iter_mut().find(|g| g.id == intervention.group) {
                Some(group) => group.interventions.push(intervention),
                None => groups.push(InterventionGroup {
                    id: &intervention.group,
                    label: self.group_label(&intervention.group),
                    interventions: vec![intervention],
                }),
            }
        }
        groups
    }

    /// Slider state at startup: every intervention at its default.
    pub fn default_intensities(&self) -> BTreeMap<String, FloatValue> {
        self.interventions
            .iter()
            .map(|i| (i.key.clone(), i.default_value))
            .collect()
    }
}
