//! Lab configuration for labrender.
//!
//! This module defines the `LabConfig` struct that represents `lab.yaml` at the
//! project root. It supports forward-compatible YAML parsing (unknown fields
//! are ignored), defaults for every field, and validation of config values.

mod model;
mod operations;
pub mod types;


pub use model::LabConfig;
pub use operations::ConfigOverrides;
