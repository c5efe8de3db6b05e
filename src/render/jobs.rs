//! The two render jobs of a lab run.

use super::Renderer;
use crate::error::Result;
use crate::params::{LabParams, ParamMap};

/// Detector geometry source, rendered from the detector parameters.
pub const DETECTOR_SOURCE: &str = "B1DetectorConstruction.cc";

/// Primary generator source, rendered from the generator parameters.
pub const GENERATOR_SOURCE: &str = "B1PrimaryGeneratorAction.cc";

/// A single output file and the parameters it is rendered with.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderJob {
    pub name: &'static str,
    pub params: ParamMap,
}

impl RenderJob {
    pub fn render(&self, renderer: &dyn Renderer) -> Result<String> {
        renderer.render(self.name, &self.params)
    }
}

/// Build the render jobs in execution order: detector first, then generator.
pub fn render_jobs(params: &LabParams) -> [RenderJob; 2] {
    [
        RenderJob {
            name: DETECTOR_SOURCE,
            params: params.detector.to_param_map(),
        },
        RenderJob {
            name: GENERATOR_SOURCE,
            params: params.generator.to_param_map(),
        },
    ]
}
