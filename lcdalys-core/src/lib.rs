mod bounds;
pub mod config;
pub mod engine;
pub mod intervention;
pub mod period;
pub mod projector;
pub mod scenario;
pub mod selection;
pub mod settings;
pub mod timeseries;

pub mod errors;
