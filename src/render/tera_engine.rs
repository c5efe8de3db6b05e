//! Tera-backed renderer for Jinja-syntax templates on disk.

use super::Renderer;
use crate::error::{LabError, Result};
use crate::params::ParamMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use tracing::debug;

/// Loads `<template_dir>/<name>.<extension>` and renders it with Tera.
///
/// Autoescaping is disabled: outputs are source files, not HTML. Undefined
/// placeholders are errors.
#[derive(Debug, Clone)]
pub struct TeraRenderer {
    template_dir: PathBuf,
    extension: String,
}

impl TeraRenderer {
    pub fn new(template_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            template_dir: template_dir.into(),
            extension: extension.into(),
        }
    }

    /// Path of the template that renders to `name`.
    pub fn template_path(&self, name: &str) -> PathBuf {
        self.template_dir
            .join(format!("{}.{}", name, self.extension))
    }

    fn load(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LabError::TemplateNotFound {
                path: path.to_path_buf(),
            },
            _ => LabError::TemplateRender {
                template: path.display().to_string(),
                message: format!("failed to read template: {}", e),
            },
        })
    }
}

impl Renderer for TeraRenderer {
    fn render(&self, name: &str, params: &ParamMap) -> Result<String> {
        let path = self.template_path(name);
        debug!(template = %path.display(), "loading template");

        let source = self.load(&path)?;

        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(name, &source)
            .map_err(|e| render_error(name, &e))?;

        let context = Context::from_serialize(params).map_err(|e| render_error(name, &e))?;

        tera.render(name, &context)
            .map_err(|e| render_error(name, &e))
    }
}

fn render_error(name: &str, err: &tera::Error) -> LabError {
    LabError::TemplateRender {
        template: name.to_string(),
        message: error_chain(err),
    }
}

/// Flatten an error and its sources into one line.
///
/// Tera reports the useful detail (e.g. the undefined variable) in the source
/// chain, not the top-level message.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
