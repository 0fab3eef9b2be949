use super::box_filter::*;
use super::gaussian::*;
use super::tent::*;
use crate::core::error::OkapiError;
use crate::core::filter::*;
use crate::core::param_set::*;

use std::sync::Arc;

pub fn create_filter(name: &str, params: &ParamSet) -> Result<Arc<dyn Filter>, OkapiError> {
    match name {
        "box" => create_box_filter(params),
        "gaussian" => create_gaussian_filter(params),
        "tent" => create_tent_filter(params),
        _ => {
            let msg = format!("Filter \"{}\" unknown.", name);
            return Err(OkapiError::error(&msg));
        }
    }
}
