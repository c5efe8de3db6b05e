//! The lab run pipeline.
//!
//! Steps run strictly in order and stop at the first error:
//!
//! 1. Render and write the detector source
//! 2. Render and write the generator source
//! 3. Run the build command (optional)
//!
//! Parameters are collected by the caller before the pipeline starts, so a
//! bad parameter fails the run before anything is written.

use crate::build_script::{BuildOutcome, check_outcome, run_build};
use crate::config::LabConfig;
use crate::context::LabContext;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::params::LabParams;
use crate::render::{Renderer, render_jobs};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// What a pipeline run does beyond rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Run the build command after writing both sources.
    pub build: bool,
    /// Fail on a non-zero build exit.
    pub strict_build: bool,
    /// Print each rendered source.
    pub echo: bool,
}

impl RunOptions {
    pub fn from_config(config: &LabConfig) -> Self {
        Self {
            build: true,
            strict_build: config.strict_build,
            echo: config.echo_rendered,
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Rendered sources, in the order they were written.
    pub written: Vec<PathBuf>,
    /// Build outcome, if the build ran.
    pub build: Option<BuildOutcome>,
}

/// Render both sources and write them into the lab.
///
/// `out` receives each rendered text when `echo` is set.
pub fn render_sources(
    ctx: &LabContext,
    renderer: &dyn Renderer,
    params: &LabParams,
    echo: bool,
    out: &mut dyn Write,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for job in render_jobs(params) {
        info!(source = job.name, "rendering");
        let rendered = job.render(renderer)?;

        if echo && let Err(e) = writeln!(out, "{}", rendered) {
            warn!(error = %e, "failed to echo rendered source");
        }

        let path = ctx.output_path(job.name);
        atomic_write_file(&path, &rendered)?;
        info!(path = %path.display(), bytes = rendered.len(), "wrote source");
        written.push(path);
    }

    Ok(written)
}

/// Run the full pipeline: render, write, then build.
pub fn run(
    ctx: &LabContext,
    config: &LabConfig,
    renderer: &dyn Renderer,
    params: &LabParams,
    options: RunOptions,
    out: &mut dyn Write,
) -> Result<RunReport> {
    let written = render_sources(ctx, renderer, params, options.echo, out)?;

    if !options.build {
        info!("skipping build command");
        return Ok(RunReport {
            written,
            build: None,
        });
    }

    let outcome = run_build(&config.build_command, &ctx.root)?;
    check_outcome(&outcome, options.strict_build)?;

    Ok(RunReport {
        written,
        build: Some(outcome),
    })
}
