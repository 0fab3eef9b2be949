use crate::core::base::*;
use std::fmt;

/// Pixel reconstruction filter with finite support.
///
/// `evaluate` takes the offset from the sample position to the pixel center
/// and must return 0 at and beyond `get_radius()` in either axis.
pub trait Filter: Send + Sync + fmt::Display {
    fn evaluate(&self, p: &Point2f) -> Float;
    fn get_radius(&self) -> Vector2f;
}
