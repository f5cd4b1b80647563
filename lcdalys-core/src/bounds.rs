//! Slider bound handling shared by interventions and advanced settings.

use crate::errors::{DalyError, DalyResult};
use crate::timeseries::FloatValue;
use tracing::warn;

/// Clamp `value` into `[min, max]`, logging when it had to move.
///
/// Non-finite values are replaced by `fallback`.
pub(crate) fn clamp_into(
    key: &str,
    value: FloatValue,
    min: FloatValue,
    max: FloatValue,
    fallback: FloatValue,
) -> FloatValue {
    if !value.is_finite() {
        warn!(key = %key, value, fallback, "Non-finite input replaced by fallback");
        return fallback;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!(key = %key, value, min, max, "Input outside bounds; clamping");
    }
    clamped
}

/// Check that a slider declaration is usable.
pub(crate) fn validate_bounds(
    key: &str,
    min: FloatValue,
    max: FloatValue,
    default_value: FloatValue,
) -> DalyResult<()> {
    if !(min.is_finite() && max.is_finite() && min < max) {
        return Err(DalyError::InvalidBounds {
            key: key.to_string(),
            min,
            max,
        });
    }
    if !(min..=max).contains(&default_value) {
        return Err(DalyError::DefaultOutOfRange {
            key: key.to_string(),
            value: default_value,
            min,
            max,
        });
    }
    Ok(())
}
