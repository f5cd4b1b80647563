use thiserror::Error;

/// Errors raised while loading catalogs, configuration or baseline datasets.
///
/// The reduction engine itself never fails: out-of-range inputs are clamped,
/// unknown keys are ignored and empty windows produce empty projections.
#[derive(Error, Debug)]
pub enum DalyError {
    #[error("{0}")]
    Error(String),
    #[error("Invalid period {0:?}. Expected YYYY or YYYY-MM-DD")]
    InvalidPeriod(String),
    #[error("Duplicate {kind} key {key:?}")]
    DuplicateKey { kind: &'static str, key: String },
    #[error("Invalid bounds for {key:?}: min={min} must be below max={max}")]
    InvalidBounds { key: String, min: f64, max: f64 },
    #[error("Default value {value} for {key:?} lies outside [{min}, {max}]")]
    DefaultOutOfRange {
        key: String,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("Reduction factor {value} for {key:?} must lie within [0, 1]")]
    InvalidReductionFactor { key: String, value: f64 },
    #[error("Scenario {0:?} has neither a reduction factor nor precomputed values")]
    EmptyScenario(String),
    #[error("Baseline periods must be strictly increasing: {previous} is followed by {next}")]
    UnorderedBaseline { previous: String, next: String },
    #[error("Baseline value for {period} must be finite and non-negative, got {value}")]
    InvalidBaselineValue { period: String, value: f64 },
    #[error("Failed to parse TOML configuration: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Failed to write TOML configuration: {0}")]
    TomlWrite(#[from] toml::ser::Error),
    #[error("Failed to read or write JSON records: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type for `Result<T, DalyError>`.
pub type DalyResult<T> = Result<T, DalyError>;
