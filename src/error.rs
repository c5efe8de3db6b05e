//! Error types for the labrender CLI.
//!
//! Every variant names the pipeline step that failed so the message printed
//! by `main` is enough to locate the problem.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for labrender operations.
#[derive(Error, Debug)]
pub enum LabError {
    /// A numeric parameter could not be parsed from its environment value.
    #[error("invalid value '{value}' for parameter '{name}': {reason}")]
    ConfigParse {
        name: String,
        value: String,
        reason: String,
    },

    /// The lab config file or a command-line override is invalid.
    #[error("{0}")]
    Config(String),

    /// The template file for a render job does not exist.
    #[error("template not found: '{}'", path.display())]
    TemplateNotFound { path: PathBuf },

    /// The template engine rejected the template or its parameters.
    #[error("failed to render template '{template}': {message}")]
    TemplateRender { template: String, message: String },

    /// A rendered file could not be written.
    #[error("failed to write '{}': {message}", path.display())]
    FileWrite { path: PathBuf, message: String },

    /// The build command could not be started.
    #[error("failed to run build command '{command}': {message}")]
    BuildInvocation { command: String, message: String },

    /// The build command ran but did not succeed (strict mode only).
    #[error("build command '{command}' failed with {}", describe_exit(*code))]
    BuildFailed { command: String, code: Option<i32> },
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl LabError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LabError::ConfigParse { .. } | LabError::Config(_) => exit_codes::USER_ERROR,
            LabError::TemplateNotFound { .. } | LabError::TemplateRender { .. } => {
                exit_codes::TEMPLATE_FAILURE
            }
            LabError::FileWrite { .. } => exit_codes::WRITE_FAILURE,
            LabError::BuildInvocation { .. } | LabError::BuildFailed { .. } => {
                exit_codes::BUILD_FAILURE
            }
        }
    }
}

/// Result type alias for labrender operations.
pub type Result<T> = std::result::Result<T, LabError>;
