use super::perspective::create_perspective_sensor;
use crate::core::error::*;
use crate::core::film::*;
use crate::core::param_set::*;
use crate::core::sensor::*;

use std::sync::{Arc, RwLock};

pub fn create_sensor(
    name: &str,
    params: &ParamSet,
    film: &Arc<RwLock<Film>>,
) -> Result<Arc<dyn Sensor>, OkapiError> {
    match name {
        "perspective" => create_perspective_sensor(params, film),
        _ => {
            let msg = format!("Sensor \"{}\" unknown.", name);
            return Err(OkapiError::error(&msg));
        }
    }
}
