//! Command implementations for labrender.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the setup shared by every command: loading the lab
//! config, applying command-line overrides, and resolving lab paths.

mod params;
mod render;
mod run;

use crate::cli::{Command, GlobalArgs};
use crate::config::{ConfigOverrides, LabConfig};
use crate::context::LabContext;
use crate::error::Result;
use crate::render::TeraRenderer;

/// Dispatch a command to its implementation.
pub fn dispatch(global: GlobalArgs, command: Command) -> Result<()> {
    match command {
        Command::Run(args) => run::cmd_run(&global, args),
        Command::Render => render::cmd_render(&global),
        Command::Params(args) => params::cmd_params(args),
    }
}

/// Config, paths, and renderer for one invocation.
pub(crate) struct Setup {
    pub config: LabConfig,
    pub ctx: LabContext,
    pub renderer: TeraRenderer,
}

/// Load config and resolve lab paths for `global`.
///
/// `overrides` carries command-specific values; the global lab, extension and
/// quiet flags are merged into it here.
pub(crate) fn load_setup(global: &GlobalArgs, overrides: ConfigOverrides) -> Result<Setup> {
    let overrides = ConfigOverrides {
        lab_name: global.lab.clone(),
        template_extension: global.template_ext.clone(),
        quiet: global.quiet,
        ..overrides
    };

    let config =
        LabConfig::resolve(&global.root, global.config.as_deref())?.with_overrides(overrides)?;
    let ctx = LabContext::new(&global.root, &config)?;
    let renderer = ctx.renderer();

    Ok(Setup {
        config,
        ctx,
        renderer,
    })
}
