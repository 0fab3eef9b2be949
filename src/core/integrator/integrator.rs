use crate::core::base::*;
use crate::core::geometry::*;
use crate::core::sampler::*;
use crate::core::scene::*;
use crate::core::spectrum::*;

use std::fmt;

/// Estimates the radiance arriving along a primary ray.
pub trait Integrator: Send + Sync + fmt::Display {
    /// Returns the color for `ray`. When `aovs` is given it has one slot per
    /// entry of `aov_names()` and is filled as well.
    fn trace(
        &self,
        scene: &Scene,
        sampler: &mut dyn Sampler,
        ray: &Ray,
        depth: u32,
        aovs: Option<&mut [Float]>,
    ) -> Spectrum;

    /// Channel names; empty means plain RGB output.
    fn aov_names(&self) -> Vec<String> {
        Vec::new()
    }
}
