//! Implementation of the `labrender run` command.
//!
//! Collects parameters from the environment, renders and writes both lab
//! sources, then runs the build command.

use crate::cli::{GlobalArgs, RunArgs};
use crate::config::ConfigOverrides;
use crate::error::Result;
use crate::params::{LabParams, collect_from_env};
use crate::pipeline::{self, RunOptions, RunReport};
use std::io::Write;
use tracing::info;

use super::load_setup;

/// Execute the `labrender run` command.
pub fn cmd_run(global: &GlobalArgs, args: RunArgs) -> Result<()> {
    // Parameters first: a bad value must fail before anything is written.
    let params = collect_from_env()?;
    let mut stdout = std::io::stdout().lock();
    run_with_params(global, args, &params, &mut stdout)?;
    Ok(())
}

fn run_with_params(
    global: &GlobalArgs,
    args: RunArgs,
    params: &LabParams,
    out: &mut dyn Write,
) -> Result<RunReport> {
    let setup = load_setup(
        global,
        ConfigOverrides {
            build_command: args.build_command,
            strict_build: args.strict_build,
            ..ConfigOverrides::default()
        },
    )?;

    let options = RunOptions {
        build: !args.no_build,
        ..RunOptions::from_config(&setup.config)
    };

    let report = pipeline::run(
        &setup.ctx,
        &setup.config,
        &setup.renderer,
        params,
        options,
        out,
    )?;

    info!(
        lab = %setup.ctx.lab_dir.display(),
        sources = report.written.len(),
        built = report.build.is_some(),
        "lab run complete"
    );
    Ok(report)
}
