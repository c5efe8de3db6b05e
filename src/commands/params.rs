//! Implementation of the `labrender params` command.
//!
//! Prints the parameters a run would use, after environment lookup and
//! defaults, without reading templates or writing files.

use crate::cli::ParamsArgs;
use crate::error::{LabError, Result};
use crate::params::{LabParams, collect_from_env};

/// Execute the `labrender params` command.
pub fn cmd_params(args: ParamsArgs) -> Result<()> {
    let params = collect_from_env()?;
    print!("{}", format_params(&params, args.json)?);
    Ok(())
}

fn format_params(params: &LabParams, json: bool) -> Result<String> {
    if json {
        let mut text = serde_json::to_string_pretty(params)
            .map_err(|e| LabError::Config(format!("failed to serialize parameters: {}", e)))?;
        text.push('\n');
        Ok(text)
    } else {
        serde_yaml::to_string(params)
            .map_err(|e| LabError::Config(format!("failed to serialize parameters: {}", e)))
    }
}
