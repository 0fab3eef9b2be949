use crate::core::prelude::*;

use std::fmt;
use std::sync::Arc;

/// Separable triangle filter, normalized by the support area.
pub struct TentFilter {
    base: BaseFilter,
}

impl TentFilter {
    pub fn new(radius: &Vector2f) -> Self {
        TentFilter {
            base: BaseFilter::new(radius),
        }
    }

    fn tent(x: Float) -> Float {
        let x = Float::abs(x);
        if x < 1.0 {
            return 1.0 - x;
        }
        return 0.0;
    }
}

impl Filter for TentFilter {
    fn evaluate(&self, p: &Point2f) -> Float {
        let inv = self.base.get_inv_radius();
        return Self::tent(p.x * inv.x) * Self::tent(p.y * inv.y) * inv.x * inv.y;
    }
    fn get_radius(&self) -> Vector2f {
        self.base.get_radius()
    }
}

impl fmt::Display for TentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.base.get_radius();
        write!(f, "TentFilter[radius=({}, {})]", r.x, r.y)
    }
}

pub fn create_tent_filter(params: &ParamSet) -> Result<Arc<dyn Filter>, OkapiError> {
    let radius = params.find_one_vector2f("radius", &Vector2f::from(DEFAULT_FILTER_RADIUS));
    return Ok(Arc::new(TentFilter::new(&radius)));
}
