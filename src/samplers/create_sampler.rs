use crate::core::error::*;
use crate::core::param_set::*;
use crate::core::sampler::*;

use super::independent::create_independent_sampler;

pub fn create_sampler(name: &str, params: &ParamSet) -> Result<Box<dyn Sampler>, OkapiError> {
    match name {
        "independent" | "random" => create_independent_sampler(params),
        _ => {
            return Err(OkapiError::error(&format!(
                "Sampler \"{}\" unknown.",
                name
            )));
        }
    }
}
