use crate::core::prelude::*;

use std::fmt;
use std::sync::Arc;

pub const DEFAULT_STANDARD_DEVIATION: Float = 0.5;

/// Gaussian shifted down so that it reaches zero at the radius.
pub struct GaussianFilter {
    base: BaseFilter,
    standard_deviation: Float,
    exp_x: Float,
    exp_y: Float,
}

impl GaussianFilter {
    pub fn new(radius: &Vector2f, standard_deviation: Float) -> Self {
        GaussianFilter {
            base: BaseFilter::new(radius),
            standard_deviation,
            exp_x: Self::gaussian(radius.x, standard_deviation),
            exp_y: Self::gaussian(radius.y, standard_deviation),
        }
    }

    pub fn standard_deviation(&self) -> Float {
        self.standard_deviation
    }

    fn gaussian(x: Float, sigma: Float) -> Float {
        let norm = 1.0 / (Float::sqrt(2.0 * PI) * sigma);
        return norm * Float::exp(-(x * x) / (2.0 * sigma * sigma));
    }
}

impl Filter for GaussianFilter {
    fn evaluate(&self, p: &Point2f) -> Float {
        if !self.base.inside(p) {
            return 0.0;
        }
        let sigma = self.standard_deviation;
        let gx = Float::max(0.0, Self::gaussian(p.x, sigma) - self.exp_x);
        let gy = Float::max(0.0, Self::gaussian(p.y, sigma) - self.exp_y);
        return gx * gy;
    }

    fn get_radius(&self) -> Vector2f {
        self.base.get_radius()
    }
}

impl fmt::Display for GaussianFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.base.get_radius();
        write!(
            f,
            "GaussianFilter[radius=({}, {}), standard_deviation={}]",
            r.x, r.y, self.standard_deviation
        )
    }
}

pub fn create_gaussian_filter(params: &ParamSet) -> Result<Arc<dyn Filter>, OkapiError> {
    let radius = params.find_one_vector2f("radius", &Vector2f::from(DEFAULT_FILTER_RADIUS));
    let sigma = params.find_one_float("standard_deviation", DEFAULT_STANDARD_DEVIATION);
    if sigma <= 0.0 {
        let msg = format!("Gaussian standard deviation must be positive, got {}.", sigma);
        return Err(OkapiError::error(&msg));
    }
    return Ok(Arc::new(GaussianFilter::new(&radius, sigma)));
}
