use super::types::Float;

pub const FLOAT_ONE_MINUS_EPSILON: f32 = 0.99999994;

pub const PI: Float = std::f32::consts::PI;
pub const INV_PI: Float = std::f32::consts::FRAC_1_PI;

/// Number of color channels of a plain RGB film.
pub const RGB_CHANNEL_COUNT: usize = 3;

#[inline]
pub fn radians(deg: Float) -> Float {
    return (PI / 180.0) * deg;
}
