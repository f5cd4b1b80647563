//! Baseline burden series.
//!
//! The baseline is the unmodified yearly DALY trajectory that every reduction
//! is applied to. It is either generated from a small set of parameters
//! ([`BaselineParameters`] / [`generate_baseline`]) or loaded from a fixed
//! dataset of `{date, dalys}` records.

use crate::errors::{DalyError, DalyResult};
use crate::period::Period;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

pub type FloatValue = f64;

/// Round half up to the nearest whole DALY, never returning a negative value.
///
/// Non-finite input collapses to zero so a malformed value renders as a flat line.
pub fn round_half_up(value: FloatValue) -> FloatValue {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    // For non-negative values `round` (half away from zero) is half up
    value.round()
}

/// The unmodified burden estimate for one period.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaselinePoint {
    pub period: Period,
    pub value: FloatValue,
}

/// Parameters of the generated baseline trajectory.
///
/// The raw quantity is the number of Long COVID cases, which declines by a
/// constant fraction each year:
///
/// $$ cases_{t+1} = cases_t \cdot (1 - decay) $$
/// $$ DALYs_t = round(cases_t \cdot weight / 1000) $$
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineParameters {
    /// First year of the trajectory (inclusive)
    /// default: 2025
    pub start_year: i32,
    /// Last year of the trajectory (inclusive)
    /// default: 2125
    pub end_year: i32,
    /// Long COVID cases in the first year
    /// default: 17,000,000
    pub initial_cases: FloatValue,
    /// Fractional decline in cases per year
    /// default: 0.02
    pub annual_decay_rate: FloatValue,
    /// DALYs per 1,000 cases
    /// default: 80
    pub dalys_per_1000_cases: FloatValue,
}

impl Default for BaselineParameters {
    fn default() -> Self {
        Self {
            start_year: 2025,
            end_year: 2125,
            initial_cases: 17_000_000.0,
            annual_decay_rate: 0.02,
            dalys_per_1000_cases: 80.0,
        }
    }
}

impl BaselineParameters {
    pub fn generator(&self) -> BaselineGenerator {
        BaselineGenerator::new(
            Period::year(self.start_year),
            Period::year(self.end_year),
            self.initial_cases,
            self.annual_decay_rate,
            self.dalys_per_1000_cases,
        )
    }

    pub fn generate(&self) -> BaselineSeries {
        BaselineSeries::from_points_unchecked(self.generator().collect())
    }
}

/// Lazily yields one yearly [`BaselinePoint`] per period from start to end.
///
/// Cloning the generator (or building a new one) restarts the sequence.
#[derive(Debug, Clone)]
pub struct BaselineGenerator {
    start: Period,
    /// Whole years from `start` to the next point
    offset: i64,
    end: Period,
    quantity: FloatValue,
    retention: FloatValue,
    per_case_weight: FloatValue,
}

impl BaselineGenerator {
    pub fn new(
        start: Period,
        end: Period,
        initial_value: FloatValue,
        annual_decay_rate: FloatValue,
        per_case_weight: FloatValue,
    ) -> Self {
        let sanitise = |v: FloatValue| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let decay = if annual_decay_rate.is_finite() {
            annual_decay_rate.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            start,
            offset: 0,
            end,
            quantity: sanitise(initial_value),
            retention: 1.0 - decay,
            per_case_weight: sanitise(per_case_weight),
        }
    }

    /// Periods are always derived from `start` so a leap day recurs.
    fn period_at(&self, offset: i64) -> Option<Period> {
        let years = i32::try_from(offset).ok()?;
        self.start.checked_add_years(years)
    }
}

impl Iterator for BaselineGenerator {
    type Item = BaselinePoint;

    fn next(&mut self) -> Option<Self::Item> {
        let period = self.period_at(self.offset).filter(|p| *p <= self.end)?;
        let point = BaselinePoint {
            period,
            value: round_half_up(self.quantity * self.per_case_weight / 1000.0),
        };
        self.quantity *= self.retention;
        self.offset += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Offset of the last point on or before `end`
        let mut last =
            i64::from(self.end.year_number()) - i64::from(self.start.year_number());
        if self.period_at(last).map_or(true, |p| p > self.end) {
            last -= 1;
        }
        let remaining = (last - self.offset + 1).max(0);
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Generate the yearly baseline from `start` to `end` inclusive.
///
/// Returns an empty series when `end` precedes `start`.
pub fn generate_baseline(
    start: Period,
    end: Period,
    initial_value: FloatValue,
    annual_decay_rate: FloatValue,
    per_case_weight: FloatValue,
) -> BaselineSeries {
    let generator =
        BaselineGenerator::new(start, end, initial_value, annual_decay_rate, per_case_weight);
    BaselineSeries::from_points_unchecked(generator.collect())
}

/// Dataset record shape shared with the chart front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BaselineRecord {
    date: Period,
    dalys: FloatValue,
}

/// An immutable, strictly increasing series of baseline points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaselineSeries {
    periods: Vec<Period>,
    values: Array1<FloatValue>,
}

impl BaselineSeries {
    /// Build a series, validating ordering and values.
    pub fn from_points(points: Vec<BaselinePoint>) -> DalyResult<Self> {
        for point in &points {
            if !point.value.is_finite() || point.value < 0.0 {
                return Err(DalyError::InvalidBaselineValue {
                    period: point.period.to_string(),
                    value: point.value,
                });
            }
        }
        for pair in points.windows(2) {
            if pair[0].period >= pair[1].period {
                return Err(DalyError::UnorderedBaseline {
                    previous: pair[0].period.to_string(),
                    next: pair[1].period.to_string(),
                });
            }
        }
        Ok(Self::from_points_unchecked(points))
    }

    fn from_points_unchecked(points: Vec<BaselinePoint>) -> Self {
        let periods = points.iter().map(|p| p.period).collect();
        let values = points.iter().map(|p| p.value).collect();
        Self { periods, values }
    }

    /// Load `[{"date": "2025-01-01", "dalys": 1360000}, ...]` records.
    pub fn from_json_records(json: &str) -> DalyResult<Self> {
        let records: Vec<BaselineRecord> = serde_json::from_str(json)?;
        Self::from_points(
            records
                .into_iter()
                .map(|r| BaselinePoint {
                    period: r.date,
                    value: r.dalys,
                })
                .collect(),
        )
    }

    /// Write the series in the dataset record shape.
    pub fn to_json_records(&self) -> DalyResult<String> {
        let records: Vec<BaselineRecord> = self
            .iter()
            .map(|p| BaselineRecord {
                date: p.period,
                dalys: p.value,
            })
            .collect();
        Ok(serde_json::to_string_pretty(&records)?)
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<BaselinePoint> {
        Some(BaselinePoint {
            period: *self.periods.get(index)?,
            value: *self.values.get(index)?,
        })
    }

    pub fn first(&self) -> Option<BaselinePoint> {
        self.get(0)
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn values(&self) -> &Array1<FloatValue> {
        &self.values
    }

    /// Value at an exact period, if present.
    pub fn value_at(&self, period: Period) -> Option<FloatValue> {
        self.periods
            .binary_search(&period)
            .ok()
            .map(|index| self.values[index])
    }

    /// Index range of points within `[start, end]` inclusive.
    ///
    /// Relies on the periods being strictly increasing.
    pub fn window_range(&self, start: Period, end: Period) -> std::ops::Range<usize> {
        if start > end {
            return 0..0;
        }
        let lower = self.periods.partition_point(|p| *p < start);
        let upper = self.periods.partition_point(|p| *p <= end);
        lower..upper.max(lower)
    }

    pub fn iter(&self) -> impl Iterator<Item = BaselinePoint> + '_ {
        self.periods
            .iter()
            .zip(self.values.iter())
            .map(|(period, value)| BaselinePoint {
                period: *period,
                value: *value,
            })
    }
}
