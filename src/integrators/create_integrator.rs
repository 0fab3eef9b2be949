use super::aov::*;
use super::constant::*;
use super::normal::*;
use crate::core::prelude::*;

use std::sync::Arc;

pub fn create_integrator(
    name: &str,
    params: &ParamSet,
) -> Result<Arc<dyn Integrator>, OkapiError> {
    match name {
        "constant" => create_constant_integrator(params),
        "normal" => create_normal_integrator(params),
        "aov" => create_aov_integrator(params),
        _ => {
            let msg = format!("Integrator \"{}\" unknown.", name);
            return Err(OkapiError::error(&msg));
        }
    }
}
