//! Constants and default value functions used by the `LabConfig` struct.

/// Default config file name, looked up at the project root.
pub const DEFAULT_CONFIG_FILE: &str = "lab.yaml";

/// Source directory inside a lab, holding both templates and rendered files.
pub const LAB_SOURCE_DIR: &str = "src";

pub fn default_lab_name() -> String {
    "B1".to_string()
}

pub fn default_template_extension() -> String {
    "j2".to_string()
}

pub fn default_build_command() -> String {
    "./build_and_run.sh".to_string()
}

pub fn default_true() -> bool {
    true
}
