use crate::core::prelude::*;

use log::*;
use std::fmt;
use std::sync::{Arc, RwLock};

/// Pinhole camera with a horizontal field of view.
pub struct PerspectiveSensor {
    film: Arc<RwLock<Film>>,
    film_size: Vector2f,
    origin: Point3f,
    forward: Vector3f,
    right: Vector3f,
    up: Vector3f,
    tan_half_fov: Float,
    near_clip: Float,
    far_clip: Float,
}

impl PerspectiveSensor {
    pub fn new(
        film: &Arc<RwLock<Film>>,
        fov: Float,
        origin: &Point3f,
        target: &Point3f,
        up: &Vector3f,
        near_clip: Float,
        far_clip: Float,
    ) -> Result<Self, OkapiError> {
        if near_clip <= 0.0 {
            return Err(OkapiError::error(
                "The 'near_clip' parameter must be greater than zero!",
            ));
        }
        if near_clip >= far_clip {
            return Err(OkapiError::error(
                "Invalid parameters for near and far clip plane distance defined",
            ));
        }
        let forward = *target - *origin;
        if forward.length() <= 0.0 {
            return Err(OkapiError::error("Sensor origin and target coincide."));
        }
        let forward = forward.normalize();
        let right = Vector3f::cross(up, &forward);
        if right.length() <= 0.0 {
            return Err(OkapiError::error("Sensor up vector is parallel to the view direction."));
        }
        let right = right.normalize();
        let up = Vector3f::cross(&forward, &right);

        let film_size = film.read()?.size().to_f32();
        Ok(PerspectiveSensor {
            film: Arc::clone(film),
            film_size,
            origin: *origin,
            forward,
            right,
            up,
            tan_half_fov: Float::tan(0.5 * radians(fov)),
            near_clip,
            far_clip,
        })
    }
}

impl Sensor for PerspectiveSensor {
    fn film(&self) -> Arc<RwLock<Film>> {
        Arc::clone(&self.film)
    }

    fn generate_ray(&self, raster_position: &Point2f) -> Ray {
        let aspect = self.film_size.x / self.film_size.y;
        let sx = (2.0 * raster_position.x / self.film_size.x - 1.0) * self.tan_half_fov;
        let sy = (1.0 - 2.0 * raster_position.y / self.film_size.y) * self.tan_half_fov / aspect;
        let d = (self.right * sx + self.up * sy + self.forward).normalize();
        let inv_z = 1.0 / d.dot(&self.forward);
        return Ray::new(
            &self.origin,
            &d,
            self.near_clip * inv_z,
            self.far_clip * inv_z,
        );
    }
}

impl fmt::Display for PerspectiveSensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PerspectiveSensor[origin=({}, {}, {}), near_clip={}, far_clip={}]",
            self.origin.x, self.origin.y, self.origin.z, self.near_clip, self.far_clip
        )
    }
}

pub fn create_perspective_sensor(
    params: &ParamSet,
    film: &Arc<RwLock<Film>>,
) -> Result<Arc<dyn Sensor>, OkapiError> {
    let fov = params.find_one_float("fov", 30.0);
    let origin = params.find_one_point3f("origin", &Point3f::new(0.0, 0.0, 0.0));
    let target = params.find_one_point3f("target", &Point3f::new(0.0, 0.0, 1.0));
    let up = params.find_one_point3f("up", &Vector3f::new(0.0, 1.0, 0.0));
    let near_clip = params.find_one_float("near_clip", 0.1);
    let far_clip = params.find_one_float("far_clip", 500.0);
    debug!("Perspective sensor fov={} near={} far={}", fov, near_clip, far_clip);
    let sensor = PerspectiveSensor::new(film, fov, &origin, &target, &up, near_clip, far_clip)?;
    return Ok(Arc::new(sensor));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::*;

    fn film(w: i32, h: i32) -> Arc<RwLock<Film>> {
        let filter: Arc<dyn Filter> = Arc::new(BoxFilter::new(&Vector2f::from(0.5)));
        Arc::new(RwLock::new(Film::new(&Vector2i::new(w, h), "out.png", &filter)))
    }

    #[test]
    fn test_001() {
        let film = film(100, 100);
        let sensor = create_perspective_sensor(&ParamSet::new(), &film).unwrap();
        let ray = sensor.generate_ray(&Point2f::new(50.0, 50.0));
        assert!((ray.d - Vector3f::new(0.0, 0.0, 1.0)).length() < 1e-6);
        assert!((ray.t_min - 0.1).abs() < 1e-6);
        assert!((ray.t_max - 500.0).abs() < 1e-3);
        assert!(Arc::ptr_eq(&sensor.film(), &film));
    }

    #[test]
    fn test_002() {
        let film = film(100, 50);
        let sensor = create_perspective_sensor(&ParamSet::new(), &film).unwrap();
        let left = sensor.generate_ray(&Point2f::new(0.0, 25.0));
        let right = sensor.generate_ray(&Point2f::new(100.0, 25.0));
        let top = sensor.generate_ray(&Point2f::new(50.0, 0.0));
        assert!(left.d.x < 0.0);
        assert!(right.d.x > 0.0);
        assert!(top.d.y > 0.0);
        // t_min always lands on the near plane
        let p = left.position(left.t_min);
        assert!((p.z - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_003() {
        let film = film(10, 10);
        let mut params = ParamSet::new();
        params.add_float("near_clip", 0.0);
        assert!(create_perspective_sensor(&params, &film).is_err());
        let mut params = ParamSet::new();
        params.add_float("near_clip", 10.0);
        params.add_float("far_clip", 5.0);
        assert!(create_perspective_sensor(&params, &film).is_err());
    }
}
