//! Shared fixtures for tests: lab directories with templates and build scripts.
//!
//! Tests that execute a script are `#[serial]`: writing an executable while
//! another test thread forks can fail the exec with "text file busy".

use std::path::Path;
use tempfile::TempDir;

/// Detector template touching every detector parameter.
pub(crate) const DETECTOR_TEMPLATE: &str = "\
G4Material* env_mat = nist->FindOrBuildMaterial(\"G4_{{ environment_material }}\");
G4Material* world_mat = nist->FindOrBuildMaterial(\"G4_{{ world_material }}\");
G4Material* shapesArrayMaterial = nist->FindOrBuildMaterial(\"G4_{{ array_material }}\");
G4Material* shapesDetectorMaterial = nist->FindOrBuildMaterial(\"G4_{{ detector_material }}\");
G4double detectorSize = {{ detector_size }}*cm;
for (int i = 0; i < shapesArraySize; i++) { placed++; }
";

/// Generator template using the particle energy.
pub(crate) const GENERATOR_TEMPLATE: &str = "\
fParticleGun->SetParticleEnergy({{ particle_energy }}*MeV);
";

/// Create a project root with `B1/src/` holding both default templates.
pub(crate) fn create_test_lab() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path().join("B1").join("src");
    std::fs::create_dir_all(&src).unwrap();
    std::fs::write(src.join("B1DetectorConstruction.cc.j2"), DETECTOR_TEMPLATE).unwrap();
    std::fs::write(src.join("B1PrimaryGeneratorAction.cc.j2"), GENERATOR_TEMPLATE).unwrap();
    temp_dir
}

/// Read a rendered source from the default lab.
pub(crate) fn read_output(root: &Path, name: &str) -> String {
    std::fs::read_to_string(root.join("B1").join("src").join(name)).unwrap()
}

/// Write an executable `sh` script into `dir`.
#[cfg(unix)]
pub(crate) fn write_script(dir: &Path, name: &str, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
}
