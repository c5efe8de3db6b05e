//! CLI argument parsing for labrender.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Labrender: render simulation lab sources from templates, then build and run.
///
/// Detector and generator parameters are read from environment variables
/// (environment_material, world_material, array_material, detector_material,
/// detector_size, particle_energy). Unset variables use built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "labrender")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Command to run (default: run).
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Project root containing the lab directory and build script.
    #[arg(short = 'C', long, global = true, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Lab config file (default: <root>/lab.yaml when present).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Lab directory name (overrides lab_name).
    #[arg(long, global = true, value_name = "NAME")]
    pub lab: Option<String>,

    /// Template file extension without the dot (overrides template_extension).
    #[arg(long, global = true, value_name = "EXT")]
    pub template_ext: Option<String>,

    /// Do not print rendered sources.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Default for GlobalArgs {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            config: None,
            lab: None,
            template_ext: None,
            quiet: false,
            verbose: false,
        }
    }
}

/// Available commands for labrender.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render both lab sources, then run the build command.
    Run(RunArgs),

    /// Render both lab sources without building.
    Render,

    /// Print the effective parameters from the environment.
    Params(ParamsArgs),
}

/// Arguments for the `run` command.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Skip the build command.
    #[arg(long)]
    pub no_build: bool,

    /// Fail when the build command exits non-zero.
    #[arg(long)]
    pub strict_build: bool,

    /// Build command to run instead of the configured one.
    #[arg(long, value_name = "CMD")]
    pub build_command: Option<String>,
}

/// Arguments for the `params` command.
#[derive(Args, Debug, Clone, Default)]
pub struct ParamsArgs {
    /// Print JSON instead of YAML.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// The command to run, defaulting to `run` with no extra flags.
    pub fn command_or_default(self) -> (GlobalArgs, Command) {
        let command = self
            .command
            .unwrap_or_else(|| Command::Run(RunArgs::default()));
        (self.global, command)
    }
}
