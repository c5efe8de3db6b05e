//! LabConfig struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a lab render run.
///
/// This struct represents the contents of `lab.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Lab directory name relative to the project root (default: "B1").
    #[serde(default = "default_lab_name")]
    pub lab_name: String,

    /// Extension appended to output names to find templates (default: "j2").
    #[serde(default = "default_template_extension")]
    pub template_extension: String,

    /// Command run after both sources are written.
    #[serde(default = "default_build_command")]
    pub build_command: String,

    /// Treat a non-zero build exit as a failure instead of a warning.
    #[serde(default)]
    pub strict_build: bool,

    /// Print each rendered source to stdout after writing it.
    #[serde(default = "default_true")]
    pub echo_rendered: bool,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            lab_name: default_lab_name(),
            template_extension: default_template_extension(),
            build_command: default_build_command(),
            strict_build: false,
            echo_rendered: default_true(),
        }
    }
}
