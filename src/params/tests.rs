//! Tests for parameter collection.

use super::collector::parse_float;
use super::*;
use crate::error::LabError;
use serial_test::serial;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn test_defaults_when_unset() {
    let params = collect(lookup_from(&[])).unwrap();

    assert_eq!(params.detector.environment_material, "AIR");
    assert_eq!(params.detector.world_material, "AIR");
    assert_eq!(params.detector.array_material, "Pb");
    assert_eq!(params.detector.detector_material, "Pb");
    assert_eq!(params.detector.detector_size, 2.5);
    assert_eq!(params.generator.particle_energy, 6.0);
    assert_eq!(params, LabParams::default());
}

#[test]
fn test_overrides_replace_defaults() {
    let params = collect(lookup_from(&[
        ("environment_material", "G4_WATER"),
        ("world_material", "G4_Galactic"),
        ("array_material", "G4_Al"),
        ("detector_material", "G4_Si"),
        ("detector_size", "3.2"),
        ("particle_energy", "12.5"),
    ]))
    .unwrap();

    assert_eq!(params.detector.environment_material, "G4_WATER");
    assert_eq!(params.detector.world_material, "G4_Galactic");
    assert_eq!(params.detector.array_material, "G4_Al");
    assert_eq!(params.detector.detector_material, "G4_Si");
    assert_eq!(params.detector.detector_size, 3.2);
    assert_eq!(params.generator.particle_energy, 12.5);
}

#[test]
fn test_empty_values_fall_back_to_defaults() {
    let params = collect(lookup_from(&[
        ("world_material", ""),
        ("detector_size", ""),
        ("particle_energy", ""),
    ]))
    .unwrap();

    assert_eq!(params.detector.world_material, "AIR");
    assert_eq!(params.detector.detector_size, 2.5);
    assert_eq!(params.generator.particle_energy, 6.0);
}

#[test]
fn test_non_numeric_detector_size_fails() {
    let err = collect(lookup_from(&[("detector_size", "big")])).unwrap_err();
    match err {
        LabError::ConfigParse { name, value, .. } => {
            assert_eq!(name, "detector_size");
            assert_eq!(value, "big");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_non_numeric_particle_energy_fails() {
    let err = collect(lookup_from(&[("particle_energy", "6 MeV")])).unwrap_err();
    assert!(matches!(err, LabError::ConfigParse { ref name, .. } if name == "particle_energy"));
}

#[test]
fn test_parse_float_trims_whitespace() {
    assert_eq!(parse_float("detector_size", " 4.0\n").unwrap(), 4.0);
    assert_eq!(parse_float("detector_size", "1e1").unwrap(), 10.0);
    assert_eq!(parse_float("detector_size", "-1").unwrap(), -1.0);
}

#[test]
fn test_parse_float_rejects_non_finite() {
    assert!(parse_float("detector_size", "nan").is_err());
    assert!(parse_float("detector_size", "inf").is_err());
    assert!(parse_float("particle_energy", "-infinity").is_err());
}

#[test]
fn test_detector_param_map_keys() {
    let map = DetectorParams::default().to_param_map();
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "array_material",
            "detector_material",
            "detector_size",
            "environment_material",
            "world_material",
        ]
    );
    assert_eq!(map["detector_size"], serde_json::json!("2.5"));
    assert_eq!(map["array_material"], serde_json::json!("Pb"));
}

#[test]
fn test_generator_param_map() {
    let map = GeneratorParams {
        particle_energy: 1.25,
    }
    .to_param_map();
    assert_eq!(map.len(), 1);
    assert_eq!(map["particle_energy"], serde_json::json!("1.25"));
}

#[test]
#[serial]
fn test_collect_from_process_environment() {
    // SAFETY: serialized with every other test that touches the environment.
    unsafe {
        std::env::set_var("detector_material", "G4_Cu");
        std::env::set_var("particle_energy", "9.5");
    }

    let result = collect_from_env();

    unsafe {
        std::env::remove_var("detector_material");
        std::env::remove_var("particle_energy");
    }

    let params = result.unwrap();
    assert_eq!(params.detector.detector_material, "G4_Cu");
    assert_eq!(params.generator.particle_energy, 9.5);
}

#[test]
fn test_format_float_keeps_decimal_point() {
    assert_eq!(format_float(6.0), "6.0");
    assert_eq!(format_float(2.5), "2.5");
    assert_eq!(format_float(3.2), "3.2");
    assert_eq!(format_float(-1.0), "-1.0");
    assert_eq!(format_float(0.001), "0.001");
    assert_eq!(format_float(100.0), "100.0");
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_unicode_env_value_is_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    // SAFETY: serialized with every other test that touches the environment.
    unsafe { std::env::set_var("detector_size", OsStr::from_bytes(b"\xff\xfe")) };
    let result = collect_from_env();
    unsafe { std::env::remove_var("detector_size") };

    match result.unwrap_err() {
        LabError::ConfigParse { name, value, reason } => {
            assert_eq!(name, "detector_size");
            assert_eq!(value, "\u{FFFD}\u{FFFD}");
            assert!(reason.contains("Unicode"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
