//! Simulation parameters collected from the environment.
//!
//! Two flat parameter sets feed the lab templates:
//!
//! - [`DetectorParams`]: materials and detector size for the geometry source
//! - [`GeneratorParams`]: primary particle energy for the generator source
//!
//! Each set converts into a [`ParamMap`], the string-keyed mapping handed to
//! the template renderer. Numeric values are pre-formatted with
//! [`format_float`] so templates print `6.0` rather than `6`.

mod collector;

#[cfg(test)]
mod tests;

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub use collector::{collect, collect_from_env};

/// Flat mapping from template placeholder names to scalar values.
pub type ParamMap = BTreeMap<String, Value>;

pub const ENVIRONMENT_MATERIAL: &str = "environment_material";
pub const WORLD_MATERIAL: &str = "world_material";
pub const ARRAY_MATERIAL: &str = "array_material";
pub const DETECTOR_MATERIAL: &str = "detector_material";
pub const DETECTOR_SIZE: &str = "detector_size";
pub const PARTICLE_ENERGY: &str = "particle_energy";

pub const DEFAULT_ENVIRONMENT_MATERIAL: &str = "AIR";
pub const DEFAULT_WORLD_MATERIAL: &str = "AIR";
pub const DEFAULT_ARRAY_MATERIAL: &str = "Pb";
pub const DEFAULT_DETECTOR_MATERIAL: &str = "Pb";
/// Detector size in centimeters.
pub const DEFAULT_DETECTOR_SIZE: f64 = 2.5;
/// Primary particle energy in MeV.
pub const DEFAULT_PARTICLE_ENERGY: f64 = 6.0;

/// Detector geometry and materials.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectorParams {
    pub environment_material: String,
    pub world_material: String,
    pub array_material: String,
    pub detector_material: String,
    /// Size in centimeters.
    pub detector_size: f64,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            environment_material: DEFAULT_ENVIRONMENT_MATERIAL.to_string(),
            world_material: DEFAULT_WORLD_MATERIAL.to_string(),
            array_material: DEFAULT_ARRAY_MATERIAL.to_string(),
            detector_material: DEFAULT_DETECTOR_MATERIAL.to_string(),
            detector_size: DEFAULT_DETECTOR_SIZE,
        }
    }
}

impl DetectorParams {
    pub fn to_param_map(&self) -> ParamMap {
        let mut map = ParamMap::new();
        map.insert(
            ENVIRONMENT_MATERIAL.to_string(),
            Value::from(self.environment_material.as_str()),
        );
        map.insert(
            WORLD_MATERIAL.to_string(),
            Value::from(self.world_material.as_str()),
        );
        map.insert(
            ARRAY_MATERIAL.to_string(),
            Value::from(self.array_material.as_str()),
        );
        map.insert(
            DETECTOR_MATERIAL.to_string(),
            Value::from(self.detector_material.as_str()),
        );
        map.insert(
            DETECTOR_SIZE.to_string(),
            Value::from(format_float(self.detector_size)),
        );
        map
    }
}

/// Primary generator settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratorParams {
    /// Kinetic energy in MeV.
    pub particle_energy: f64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            particle_energy: DEFAULT_PARTICLE_ENERGY,
        }
    }
}

impl GeneratorParams {
    pub fn to_param_map(&self) -> ParamMap {
        let mut map = ParamMap::new();
        map.insert(
            PARTICLE_ENERGY.to_string(),
            Value::from(format_float(self.particle_energy)),
        );
        map
    }
}

/// Format a float the way it appears in rendered sources.
///
/// Whole numbers keep one decimal place (`6.0`, not `6`) so generated C++
/// literals stay floating-point. Other values use the shortest form that
/// round-trips (`2.5`, `3.2`).
pub fn format_float(value: f64) -> String {
    let text = value.to_string();
    if text.contains(['.', 'e', 'E']) || !value.is_finite() {
        text
    } else {
        format!("{}.0", text)
    }
}

/// Both parameter sets for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LabParams {
    pub detector: DetectorParams,
    pub generator: GeneratorParams,
}
