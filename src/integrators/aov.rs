use crate::core::prelude::*;

use log::*;
use std::fmt;
use std::sync::Arc;

const AOV_NAMES: [&str; 9] = [
    "color.r", "color.g", "color.b", "normal.x", "normal.y", "normal.z", "albedo.r", "albedo.g",
    "albedo.b",
];

/// Diffuse shading with the normal and albedo written out as extra channels.
///
/// The color is `albedo * max(0, dot(n, -d))`, i.e. a light placed at the
/// sensor. Misses are black and leave zeros in every channel.
pub struct AOVIntegrator {
    scale: Float,
}

impl AOVIntegrator {
    pub fn new(scale: Float) -> Self {
        AOVIntegrator { scale }
    }
}

impl Integrator for AOVIntegrator {
    fn trace(
        &self,
        scene: &Scene,
        _sampler: &mut dyn Sampler,
        ray: &Ray,
        _depth: u32,
        aovs: Option<&mut [Float]>,
    ) -> Spectrum {
        let hit = scene.intersect(ray);
        let (color, n, albedo) = match hit {
            Some(hit) => {
                let cos = Float::max(0.0, hit.n.dot(&(-ray.d.normalize())));
                (hit.albedo * (cos * self.scale), hit.n, hit.albedo)
            }
            None => (Spectrum::zero(), Normal3f::zero(), Spectrum::zero()),
        };
        if let Some(aovs) = aovs {
            let values = [
                color[0], color[1], color[2], n.x, n.y, n.z, albedo[0], albedo[1], albedo[2],
            ];
            if aovs.len() < values.len() {
                warn!(
                    "AOV buffer holds {} channels, {} expected.",
                    aovs.len(),
                    values.len()
                );
            }
            for (dst, src) in aovs.iter_mut().zip(values.iter()) {
                *dst = *src;
            }
        }
        return color;
    }

    fn aov_names(&self) -> Vec<String> {
        AOV_NAMES.iter().map(|s| s.to_string()).collect()
    }
}

impl fmt::Display for AOVIntegrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AOVIntegrator[scale={}]", self.scale)
    }
}

pub fn create_aov_integrator(params: &ParamSet) -> Result<Arc<dyn Integrator>, OkapiError> {
    let scale = params.find_one_float("scale", 1.0);
    return Ok(Arc::new(AOVIntegrator::new(scale)));
}
