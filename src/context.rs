//! Project and lab path resolution for labrender.
//!
//! All commands resolve paths through [`LabContext`] so templates, rendered
//! sources, and the build working directory always agree on the same root.

use crate::config::LabConfig;
use crate::config::types::LAB_SOURCE_DIR;
use crate::error::{LabError, Result};
use crate::render::TeraRenderer;
use std::path::{Path, PathBuf};

/// Resolved paths for one lab.
#[derive(Debug, Clone)]
pub struct LabContext {
    /// Project root: working directory of the build command.
    pub root: PathBuf,

    /// Lab directory (default: `{root}/B1/`).
    pub lab_dir: PathBuf,

    /// Directory holding templates and rendered sources (`{lab_dir}/src/`).
    pub source_dir: PathBuf,

    /// Template extension without the leading dot.
    pub template_extension: String,
}

impl LabContext {
    /// Build the context for `config` rooted at `root`.
    ///
    /// The root must be an existing directory. A relative root is made
    /// absolute against the current directory.
    pub fn new(root: &Path, config: &LabConfig) -> Result<Self> {
        if !root.is_dir() {
            return Err(LabError::Config(format!(
                "project root '{}' is not a directory",
                root.display()
            )));
        }
        let root = std::path::absolute(root).map_err(|e| {
            LabError::Config(format!(
                "failed to resolve project root '{}': {}",
                root.display(),
                e
            ))
        })?;

        let lab_dir = root.join(&config.lab_name);
        let source_dir = lab_dir.join(LAB_SOURCE_DIR);

        Ok(Self {
            root,
            lab_dir,
            source_dir,
            template_extension: config.template_extension.clone(),
        })
    }

    /// Renderer loading templates from this lab's source directory.
    pub fn renderer(&self) -> TeraRenderer {
        TeraRenderer::new(&self.source_dir, &self.template_extension)
    }

    /// Path the rendered `name` is written to.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.source_dir.join(name)
    }
}
