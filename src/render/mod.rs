//! Template rendering for lab sources.
//!
//! This module provides:
//!
//! - **Renderer**: the `render(name, params) -> text` capability
//! - **TeraRenderer**: Jinja-syntax templates loaded from the lab source dir
//! - **RenderJob**: the fixed (output name, parameters) pairs of a run
//!
//! # Template Syntax
//!
//! Templates sit next to their output with an extra extension and use
//! `{{ name }}` placeholders:
//!
//! ```text
//! G4Material* det_mat = nist->FindOrBuildMaterial("G4_{{ detector_material }}");
//! G4double det_size = {{ detector_size }}*cm;
//! ```

mod jobs;
mod tera_engine;

use crate::error::Result;
use crate::params::ParamMap;

pub use jobs::{DETECTOR_SOURCE, GENERATOR_SOURCE, RenderJob, render_jobs};
pub use tera_engine::TeraRenderer;

/// Turns a named template plus parameters into text.
pub trait Renderer {
    /// Render the template that produces `name`.
    ///
    /// Fails with `TemplateNotFound` when the template is absent and with
    /// `TemplateRender` when a placeholder has no value in `params`.
    fn render(&self, name: &str, params: &ParamMap) -> Result<String>;
}
