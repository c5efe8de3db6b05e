//! Environment lookup with per-variable defaults.

use super::*;
use crate::error::{LabError, Result};
use std::collections::HashMap;
use tracing::debug;

const PARAM_NAMES: [&str; 6] = [
    ENVIRONMENT_MATERIAL,
    WORLD_MATERIAL,
    ARRAY_MATERIAL,
    DETECTOR_MATERIAL,
    DETECTOR_SIZE,
    PARTICLE_ENERGY,
];

/// Collect parameters from the process environment.
///
/// A variable that is set to a non-Unicode value is an error, not unset.
pub fn collect_from_env() -> Result<LabParams> {
    let mut values = HashMap::new();
    for name in PARAM_NAMES {
        if let Some(value) = env_value(name)? {
            values.insert(name, value);
        }
    }
    collect(|name| values.get(name).cloned())
}

fn env_value(name: &str) -> Result<Option<String>> {
    match std::env::var_os(name) {
        None => Ok(None),
        Some(raw) => raw
            .into_string()
            .map(Some)
            .map_err(|raw| LabError::ConfigParse {
                name: name.to_string(),
                value: raw.to_string_lossy().into_owned(),
                reason: "value is not valid Unicode".to_string(),
            }),
    }
}

/// Collect parameters using `lookup` to resolve each variable.
///
/// A variable that is unset or empty falls back to its default. Numeric
/// variables must parse as finite floats.
pub fn collect<F>(lookup: F) -> Result<LabParams>
where
    F: Fn(&str) -> Option<String>,
{
    let detector = DetectorParams {
        environment_material: string_or(&lookup, ENVIRONMENT_MATERIAL, DEFAULT_ENVIRONMENT_MATERIAL),
        world_material: string_or(&lookup, WORLD_MATERIAL, DEFAULT_WORLD_MATERIAL),
        array_material: string_or(&lookup, ARRAY_MATERIAL, DEFAULT_ARRAY_MATERIAL),
        detector_material: string_or(&lookup, DETECTOR_MATERIAL, DEFAULT_DETECTOR_MATERIAL),
        detector_size: float_or(&lookup, DETECTOR_SIZE, DEFAULT_DETECTOR_SIZE)?,
    };

    let generator = GeneratorParams {
        particle_energy: float_or(&lookup, PARTICLE_ENERGY, DEFAULT_PARTICLE_ENERGY)?,
    };

    debug!(?detector, ?generator, "collected lab parameters");

    Ok(LabParams {
        detector,
        generator,
    })
}

fn lookup_non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|value| !value.is_empty())
}

fn string_or<F>(lookup: &F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup_non_empty(lookup, name).unwrap_or_else(|| default.to_string())
}

fn float_or<F>(lookup: &F, name: &str, default: f64) -> Result<f64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup_non_empty(lookup, name) {
        Some(raw) => parse_float(name, &raw),
        None => Ok(default),
    }
}

/// Parse a float parameter, accepting surrounding whitespace.
pub(super) fn parse_float(name: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|e: std::num::ParseFloatError| {
        LabError::ConfigParse {
            name: name.to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        }
    })?;

    if !value.is_finite() {
        return Err(LabError::ConfigParse {
            name: name.to_string(),
            value: raw.to_string(),
            reason: "value must be a finite number".to_string(),
        });
    }

    Ok(value)
}
