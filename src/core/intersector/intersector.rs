use crate::core::base::*;
use crate::core::geometry::*;
use crate::core::spectrum::*;

use std::fmt;

/// Closest surface hit along a ray.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Hit {
    pub t: Float,
    pub p: Point3f,
    pub n: Normal3f,
    pub albedo: Spectrum,
}

pub trait Intersector: Send + Sync + fmt::Display {
    /// Nearest hit with `ray.t_min <= t <= ray.t_max`.
    fn intersect(&self, ray: &Ray) -> Option<Hit>;
}
