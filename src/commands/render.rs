//! Implementation of the `labrender render` command.

use crate::cli::GlobalArgs;
use crate::config::ConfigOverrides;
use crate::error::Result;
use crate::params::collect_from_env;
use crate::pipeline::render_sources;
use tracing::info;

use super::load_setup;

/// Render and write both lab sources without running the build.
pub fn cmd_render(global: &GlobalArgs) -> Result<()> {
    let params = collect_from_env()?;
    let setup = load_setup(global, ConfigOverrides::default())?;

    let mut stdout = std::io::stdout().lock();
    let written = render_sources(
        &setup.ctx,
        &setup.renderer,
        &params,
        setup.config.echo_rendered,
        &mut stdout,
    )?;

    for path in &written {
        info!(path = %path.display(), "rendered");
    }

    Ok(())
}
