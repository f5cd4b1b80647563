//! Projected Long COVID disease burden under public-health interventions.
//!
//! This crate bundles the engine from [`lcdalys_core`] with the built-in
//! catalogs from [`lcdalys_catalogs`]:
//!
//! ```
//! use lcdalys::engine::CUMULATIVE_SERIES_KEY;
//! use lcdalys::period::Period;
//!
//! let engine = lcdalys::default_engine().unwrap();
//! let baseline = lcdalys::default_baseline();
//! let selection = engine.default_selection().with_intervention("UVC", 50.0);
//!
//! let projection = engine.project(&baseline, &selection);
//! assert_eq!(
//!     projection.value(Period::year(2025), CUMULATIVE_SERIES_KEY),
//!     Some(1_292_000.0)
//! );
//! ```

pub use lcdalys_catalogs::{default_baseline, default_config, default_engine};
pub use lcdalys_core::{
    config, engine, errors, intervention, period, projector, scenario, selection, settings,
    timeseries,
};

pub mod catalogs {
    pub use lcdalys_catalogs::{advanced_settings, interventions, scenarios};
}
