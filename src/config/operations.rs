//! Config loading, overriding, and validation.

use super::model::LabConfig;
use super::types::DEFAULT_CONFIG_FILE;
use crate::error::{LabError, Result};
use std::path::Path;
use tracing::debug;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub lab_name: Option<String>,
    pub template_extension: Option<String>,
    pub build_command: Option<String>,
    pub strict_build: bool,
    pub quiet: bool,
}

impl LabConfig {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LabError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a project root.
    ///
    /// An explicit path must exist. Without one, `<root>/lab.yaml` is used when
    /// present and defaults otherwise.
    pub fn resolve(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = root.join(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    debug!(path = %path.display(), "loading lab config");
                    Self::load(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document for a struct
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: LabConfig = serde_yaml::from_str(yaml)
            .map_err(|e| LabError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides and re-validate.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self> {
        if let Some(lab_name) = overrides.lab_name {
            self.lab_name = lab_name;
        }
        if let Some(ext) = overrides.template_extension {
            self.template_extension = ext;
        }
        if let Some(command) = overrides.build_command {
            self.build_command = command;
        }
        if overrides.strict_build {
            self.strict_build = true;
        }
        if overrides.quiet {
            self.echo_rendered = false;
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `lab_name` must be non-empty and a single path component
    /// - `template_extension` must be non-empty and have no leading dot
    /// - `build_command` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.lab_name.trim().is_empty() {
            return Err(LabError::Config(
                "config validation failed: lab_name must be non-empty".to_string(),
            ));
        }
        if self.lab_name.contains(['/', '\\']) || self.lab_name == "." || self.lab_name == ".." {
            return Err(LabError::Config(format!(
                "config validation failed: lab_name must be a single directory name (found '{}')",
                self.lab_name
            )));
        }

        if self.template_extension.is_empty() {
            return Err(LabError::Config(
                "config validation failed: template_extension must be non-empty".to_string(),
            ));
        }
        if self.template_extension.starts_with('.') {
            return Err(LabError::Config(format!(
                "config validation failed: template_extension must not have a leading dot (found '{}'). Use '{}' instead.",
                self.template_extension,
                self.template_extension.trim_start_matches('.')
            )));
        }

        if self.build_command.trim().is_empty() {
            return Err(LabError::Config(
                "config validation failed: build_command must be non-empty".to_string(),
            ));
        }

        Ok(())
    }
}
