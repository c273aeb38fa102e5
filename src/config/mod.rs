//! Configuration loading for marga.
//!
//! Loads all configuration from a single YAML file; every field has a
//! default, so a partial (or empty) file is valid.

mod defaults;
mod error;
mod graph;
mod marga;

pub use error::ConfigLoadError;
pub use graph::GraphSection;
pub use marga::{DEFAULT_CONFIG_PATH, MargaConfig};
