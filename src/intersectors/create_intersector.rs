use super::brute_force::*;
use super::sphere::*;
use crate::core::error::*;
use crate::core::intersector::*;
use crate::core::param_set::*;

use std::sync::Arc;

pub fn create_intersector(
    name: &str,
    spheres: &[Sphere],
    params: &ParamSet,
) -> Result<Arc<dyn Intersector>, OkapiError> {
    match name {
        "brute_force" | "exhaustive" => create_brute_force_intersector(spheres, params),
        _ => {
            return Err(OkapiError::error(&format!(
                "Intersector \"{}\" unknown.",
                name
            )));
        }
    }
}

pub fn create_shape(name: &str, params: &ParamSet) -> Result<Sphere, OkapiError> {
    match name {
        "sphere" => create_sphere(params),
        _ => {
            return Err(OkapiError::error(&format!("Shape \"{}\" unknown.", name)));
        }
    }
}
