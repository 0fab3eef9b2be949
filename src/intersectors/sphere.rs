use crate::core::prelude::*;

#[derive(Debug, PartialEq, Clone)]
pub struct Sphere {
    pub center: Point3f,
    pub radius: Float,
    pub albedo: Spectrum,
}

impl Sphere {
    pub fn new(center: &Point3f, radius: Float, albedo: &Spectrum) -> Self {
        Sphere {
            center: *center,
            radius,
            albedo: *albedo,
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let oc = ray.o - self.center;
        let a = ray.d.length_squared();
        let b = 2.0 * oc.dot(&ray.d);
        let c = oc.length_squared() - self.radius * self.radius;
        let (t0, t1) = quadratic(a, b, c)?;
        if t0.is_infinite() || t1.is_infinite() {
            return None;
        }
        let t = if ray.contains(t0) {
            t0
        } else if ray.contains(t1) {
            t1
        } else {
            return None;
        };
        let p = ray.position(t);
        let n = (p - self.center).normalize();
        return Some(Hit {
            t,
            p,
            n,
            albedo: self.albedo,
        });
    }
}

pub fn create_sphere(params: &ParamSet) -> Result<Sphere, OkapiError> {
    let center = params.find_one_point3f("center", &Point3f::zero());
    let radius = params.find_one_float("radius", 1.0);
    if radius <= 0.0 {
        return Err(OkapiError::error("Sphere radius must be greater than zero."));
    }
    let albedo = params.find_one_spectrum("albedo", &Spectrum::from(0.5));
    return Ok(Sphere::new(&center, radius, &albedo));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let s = Sphere::new(&Point3f::new(0.0, 0.0, 5.0), 1.0, &Spectrum::one());
        let ray = Ray::new(&Point3f::zero(), &Vector3f::new(0.0, 0.0, 1.0), 0.0, 100.0);
        let hit = s.intersect(&ray).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-5);
        assert!((hit.n - Vector3f::new(0.0, 0.0, -1.0)).length() < 1e-5);
        assert_eq!(hit.albedo, Spectrum::one());
    }

    #[test]
    fn test_002() {
        let s = Sphere::new(&Point3f::new(0.0, 0.0, 5.0), 1.0, &Spectrum::one());
        let miss = Ray::new(&Point3f::zero(), &Vector3f::new(0.0, 1.0, 0.0), 0.0, 100.0);
        assert!(s.intersect(&miss).is_none());
        let short = Ray::new(&Point3f::zero(), &Vector3f::new(0.0, 0.0, 1.0), 0.0, 3.0);
        assert!(s.intersect(&short).is_none());
        // origin inside: far root
        let inside = Ray::new(&Point3f::new(0.0, 0.0, 5.0), &Vector3f::new(0.0, 0.0, 1.0), 0.0, 100.0);
        let hit = s.intersect(&inside).unwrap();
        assert!((hit.t - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_003() {
        let mut params = ParamSet::new();
        params.add_float("radius", -1.0);
        assert!(create_sphere(&params).is_err());
        let s = create_sphere(&ParamSet::new()).unwrap();
        assert_eq!(s.radius, 1.0);
        assert_eq!(s.albedo, Spectrum::from(0.5));
    }
}
