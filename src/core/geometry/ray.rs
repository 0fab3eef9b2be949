use super::vector3::Vector3;

type Point3 = Vector3<f32>;

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Ray {
    pub o: Point3,
    pub d: Point3,
    pub t_min: f32,
    pub t_max: f32,
}

impl Ray {
    pub fn new(o: &Point3, d: &Point3, t_min: f32, t_max: f32) -> Self {
        Ray {
            o: *o,
            d: *d,
            t_min,
            t_max,
        }
    }

    pub fn position(&self, t: f32) -> Point3 {
        return self.o + self.d * t;
    }

    pub fn contains(&self, t: f32) -> bool {
        return t >= self.t_min && t <= self.t_max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let r = Ray::new(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(0.0, 0.0, 1.0),
            0.1,
            10.0,
        );
        assert_eq!(r.position(2.0), Point3::new(0.0, 0.0, 2.0));
        assert!(r.contains(5.0));
        assert!(!r.contains(0.05));
        assert!(!r.contains(11.0));
    }
}
