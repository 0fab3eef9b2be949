use crate::core::base::*;

pub const DEFAULT_FILTER_RADIUS: Float = 2.0;

pub struct BaseFilter {
    pub radius: Vector2f,
    pub inv_radius: Vector2f,
}

fn inverse_vector(radius: &Vector2f) -> Vector2f {
    Vector2f::new(1.0 / radius.x, 1.0 / radius.y)
}

impl BaseFilter {
    pub fn new(radius: &Vector2f) -> Self {
        BaseFilter {
            radius: *radius,
            inv_radius: inverse_vector(radius),
        }
    }
    pub fn get_radius(&self) -> Vector2f {
        self.radius
    }
    pub fn get_inv_radius(&self) -> Vector2f {
        self.inv_radius
    }
    /// True when `p` lies strictly inside the support.
    #[inline]
    pub fn inside(&self, p: &Point2f) -> bool {
        return Float::abs(p.x) < self.radius.x && Float::abs(p.y) < self.radius.y;
    }
}
