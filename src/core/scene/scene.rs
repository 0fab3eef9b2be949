use crate::core::film::*;
use crate::core::geometry::*;
use crate::core::integrator::*;
use crate::core::intersector::*;
use crate::core::sampler::*;
use crate::core::sensor::*;

use std::sync::{Arc, RwLock};

/// Everything a render loop needs: where rays start, what they hit, how
/// they are shaded and how sample positions are drawn.
pub struct Scene {
    sensor: Arc<dyn Sensor>,
    integrator: Arc<dyn Integrator>,
    sampler: Box<dyn Sampler>,
    intersector: Arc<dyn Intersector>,
}

impl Scene {
    pub fn new(
        sensor: &Arc<dyn Sensor>,
        integrator: &Arc<dyn Integrator>,
        sampler: Box<dyn Sampler>,
        intersector: &Arc<dyn Intersector>,
    ) -> Self {
        Scene {
            sensor: Arc::clone(sensor),
            integrator: Arc::clone(integrator),
            sampler,
            intersector: Arc::clone(intersector),
        }
    }

    pub fn sensor(&self) -> &Arc<dyn Sensor> {
        &self.sensor
    }

    pub fn integrator(&self) -> &Arc<dyn Integrator> {
        &self.integrator
    }

    /// Prototype sampler. Render loops clone it, they never draw from it.
    pub fn sampler(&self) -> &dyn Sampler {
        self.sampler.as_ref()
    }

    pub fn intersector(&self) -> &Arc<dyn Intersector> {
        &self.intersector
    }

    pub fn film(&self) -> Arc<RwLock<Film>> {
        self.sensor.film()
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        self.intersector.intersect(ray)
    }
}
