use crate::core::prelude::*;

use std::fmt;
use std::sync::Arc;

/// Returns the same color for every ray.
pub struct ConstantIntegrator {
    color: Spectrum,
}

impl ConstantIntegrator {
    pub fn new(color: &Spectrum) -> Self {
        ConstantIntegrator { color: *color }
    }
}

impl Integrator for ConstantIntegrator {
    fn trace(
        &self,
        _scene: &Scene,
        _sampler: &mut dyn Sampler,
        _ray: &Ray,
        _depth: u32,
        _aovs: Option<&mut [Float]>,
    ) -> Spectrum {
        return self.color;
    }
}

impl fmt::Display for ConstantIntegrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConstantIntegrator[color={}]", self.color)
    }
}

pub fn create_constant_integrator(params: &ParamSet) -> Result<Arc<dyn Integrator>, OkapiError> {
    let color = params.find_one_spectrum("color", &Spectrum::one());
    return Ok(Arc::new(ConstantIntegrator::new(&color)));
}
