//! Series projection.
//!
//! The projector maps a bound [`Reducer`] over the baseline series and keeps
//! the points inside the requested [`TimeWindow`]. The baseline is only read;
//! output points are in the baseline's chronological order.

use crate::engine::scenario_adjusted_value;
use crate::engine::ScenarioAdjustments;
use crate::period::Period;
use crate::scenario::Scenario;
use crate::selection::TimeWindow;
use crate::timeseries::{BaselinePoint, BaselineSeries, FloatValue};
use serde::Serialize;
use std::cmp::Ordering;

/// Identity of one derived output series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesInfo {
    pub key: String,
    pub label: String,
}

/// A reduction engine computation bound to one selection snapshot.
pub trait Reducer {
    /// Derived series, in the order the caller should draw them.
    fn series(&self) -> Vec<SeriesInfo>;

    /// One value per entry of [`series`](Self::series) for a baseline point.
    fn reduce(&self, point: &BaselinePoint) -> Vec<FloatValue>;
}

/// Baseline and derived values for one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedPoint {
    pub period: Period,
    pub baseline: FloatValue,
    /// Aligned with [`Projection::series`]
    pub values: Vec<FloatValue>,
}

/// Output of [`project`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Projection {
    pub series: Vec<SeriesInfo>,
    pub points: Vec<ProjectedPoint>,
}

impl Projection {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn series_keys(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.key.as_str()).collect()
    }

    /// All values of one derived series, in period order.
    pub fn series_values(&self, key: &str) -> Option<Vec<FloatValue>> {
        let index = self.series.iter().position(|s| s.key == key)?;
        Some(self.points.iter().map(|p| p.values[index]).collect())
    }

    /// Value of one derived series at a period.
    pub fn value(&self, period: Period, key: &str) -> Option<FloatValue> {
        let index = self.series.iter().position(|s| s.key == key)?;
        self.points
            .iter()
            .find(|p| p.period == period)
            .map(|p| p.values[index])
    }
}

/// Apply `reducer` to every baseline point within `window` (inclusive).
///
/// A window without overlap yields a projection with no points.
pub fn project<R: Reducer + ?Sized>(
    baseline: &BaselineSeries,
    window: &TimeWindow,
    reducer: &R,
) -> Projection {
    let series = reducer.series();
    let range = baseline.window_range(window.start, window.end);
    let points = range
        .filter_map(|index| baseline.get(index))
        .map(|point| ProjectedPoint {
            period: point.period,
            baseline: point.value,
            values: reducer.reduce(&point),
        })
        .collect();
    Projection { series, points }
}

/// Order scenarios by burden at the reference point, largest first.
///
/// Layered areas drawn in this order do not hide one another. The sort is
/// stable, so ties keep the selection order; without a reference point the
/// selection order is returned unchanged.
pub fn order_by_burden<'a>(
    scenarios: Vec<&'a Scenario>,
    reference: Option<&BaselinePoint>,
    adjustments: &ScenarioAdjustments,
) -> Vec<&'a Scenario> {
    let Some(reference) = reference else {
        return scenarios;
    };
    let mut weighted: Vec<(FloatValue, &Scenario)> = scenarios
        .into_iter()
        .map(|s| (scenario_adjusted_value(reference, s, adjustments), s))
        .collect();
    weighted.sort_by(|(a, _), (b, _)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    weighted.into_iter().map(|(_, s)| s).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeseries::generate_baseline;

    struct Halve;

    impl Reducer for Halve {
        fn series(&self) -> Vec<SeriesInfo> {
            vec![SeriesInfo {
                key: "half".to_string(),
                label: "Half".to_string(),
            }]
        }

        fn reduce(&self, point: &BaselinePoint) -> Vec<FloatValue> {
            vec![point.value / 2.0]
        }
    }

    fn baseline() -> BaselineSeries {
        generate_baseline(Period::year(2025), Period::year(2034), 1000.0, 0.0, 1000.0)
    }

    #[test]
    fn projects_inside_window_only() {
        let window = TimeWindow::new(Period::year(2027), Period::year(2030));
        let projection = project(&baseline(), &window, &Halve);

        assert_eq!(projection.len(), 4);
        assert_eq!(projection.points[0].period, Period::year(2027));
        assert_eq!(projection.points[3].period, Period::year(2030));
        assert_eq!(projection.series_keys(), ["half"]);
        assert_eq!(projection.value(Period::year(2028), "half"), Some(500.0));
        assert_eq!(projection.points[1].baseline, 1000.0);
    }

    #[test]
    fn window_bounds_between_points_are_respected() {
        let start: Period = "2026-06-01".parse().unwrap();
        let end: Period = "2028-06-01".parse().unwrap();
        let projection = project(&baseline(), &TimeWindow::new(start, end), &Halve);
        let periods: Vec<_> = projection.points.iter().map(|p| p.period).collect();
        assert_eq!(periods, [Period::year(2027), Period::year(2028)]);
    }

    #[test]
    fn disjoint_window_is_empty() {
        let window = TimeWindow::new(Period::year(2100), Period::year(2110));
        assert!(project(&baseline(), &window, &Halve).is_empty());

        let reversed = TimeWindow::new(Period::year(2030), Period::year(2026));
        assert!(project(&baseline(), &reversed, &Halve).is_empty());
    }

    #[test]
    fn projection_leaves_baseline_untouched() {
        let series = baseline();
        let before = series.clone();
        let _ = project(&series, &TimeWindow::new(Period::year(2025), Period::year(2034)), &Halve);
        assert_eq!(series, before);
    }
}
