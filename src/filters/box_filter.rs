use crate::core::prelude::*;

use std::fmt;
use std::sync::Arc;

pub struct BoxFilter {
    base: BaseFilter,
}

impl BoxFilter {
    pub fn new(radius: &Vector2f) -> Self {
        BoxFilter {
            base: BaseFilter::new(radius),
        }
    }
}

impl Filter for BoxFilter {
    fn evaluate(&self, p: &Point2f) -> Float {
        if self.base.inside(p) {
            return 1.0;
        }
        return 0.0;
    }
    fn get_radius(&self) -> Vector2f {
        self.base.get_radius()
    }
}

impl fmt::Display for BoxFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.base.get_radius();
        write!(f, "BoxFilter[radius=({}, {})]", r.x, r.y)
    }
}

pub fn create_box_filter(params: &ParamSet) -> Result<Arc<dyn Filter>, OkapiError> {
    let radius = params.find_one_vector2f("radius", &Vector2f::from(DEFAULT_FILTER_RADIUS));
    return Ok(Arc::new(BoxFilter::new(&radius)));
}
