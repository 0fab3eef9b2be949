use crate::core::prelude::*;

use std::fmt;
use std::sync::Arc;

fn v2c(v: &Vector3f) -> Spectrum {
    let v = 0.5 * *v + Vector3f::new(0.5, 0.5, 0.5);
    return Spectrum::new(v[0], v[1], v[2]).clamp(0.0, 1.0);
}

/// Shades hits with their surface normal mapped to `[0, 1]`.
pub struct NormalIntegrator {}

impl NormalIntegrator {
    pub fn new() -> Self {
        NormalIntegrator {}
    }
}

impl Default for NormalIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Integrator for NormalIntegrator {
    fn trace(
        &self,
        scene: &Scene,
        _sampler: &mut dyn Sampler,
        ray: &Ray,
        _depth: u32,
        _aovs: Option<&mut [Float]>,
    ) -> Spectrum {
        match scene.intersect(ray) {
            Some(hit) => v2c(&hit.n),
            None => Spectrum::zero(),
        }
    }
}

impl fmt::Display for NormalIntegrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NormalIntegrator")
    }
}

pub fn create_normal_integrator(_params: &ParamSet) -> Result<Arc<dyn Integrator>, OkapiError> {
    return Ok(Arc::new(NormalIntegrator::new()));
}
