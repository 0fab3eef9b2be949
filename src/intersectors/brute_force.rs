use super::sphere::*;
use crate::core::prelude::*;

use std::fmt;
use std::sync::Arc;

/// Tests every shape, keeps the nearest hit.
pub struct BruteForceIntersector {
    spheres: Vec<Sphere>,
}

impl BruteForceIntersector {
    pub fn new(spheres: &[Sphere]) -> Self {
        BruteForceIntersector {
            spheres: spheres.to_vec(),
        }
    }

    pub fn shape_count(&self) -> usize {
        self.spheres.len()
    }
}

impl Intersector for BruteForceIntersector {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let mut r = *ray;
        let mut closest = None;
        for sphere in self.spheres.iter() {
            if let Some(hit) = sphere.intersect(&r) {
                r.t_max = hit.t;
                closest = Some(hit);
            }
        }
        return closest;
    }
}

impl fmt::Display for BruteForceIntersector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BruteForceIntersector[shapes={}]", self.spheres.len())
    }
}

pub fn create_brute_force_intersector(
    spheres: &[Sphere],
    _params: &ParamSet,
) -> Result<Arc<dyn Intersector>, OkapiError> {
    return Ok(Arc::new(BruteForceIntersector::new(spheres)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let near = Sphere::new(&Point3f::new(0.0, 0.0, 3.0), 1.0, &Spectrum::from(0.25));
        let far = Sphere::new(&Point3f::new(0.0, 0.0, 10.0), 1.0, &Spectrum::from(0.75));
        let isect = BruteForceIntersector::new(&[far, near]);
        let ray = Ray::new(&Point3f::zero(), &Vector3f::new(0.0, 0.0, 1.0), 0.0, 100.0);
        let hit = isect.intersect(&ray).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-5);
        assert_eq!(hit.albedo, Spectrum::from(0.25));
        assert_eq!(format!("{}", isect), "BruteForceIntersector[shapes=2]");
    }

    #[test]
    fn test_002() {
        let isect = BruteForceIntersector::new(&[]);
        let ray = Ray::new(&Point3f::zero(), &Vector3f::new(0.0, 0.0, 1.0), 0.0, 100.0);
        assert!(isect.intersect(&ray).is_none());
    }
}
