use crate::core::base::*;

#[inline]
pub fn gamma_correct(value: Float) -> Float {
    if value <= 0.0031308 {
        return 12.92 * value;
    } else {
        return 1.055 * Float::powf(value, 1.0 / 2.4) - 0.055;
    }
}

/// Maps a linear value to an 8 bit sRGB code.
#[inline]
pub fn to_byte(value: Float) -> u8 {
    let v = 255.0 * gamma_correct(value) + 0.5;
    return Float::clamp(v, 0.0, 255.0) as u8;
}

/// Roots of `a t^2 + b t + c`, smaller first.
#[inline]
pub fn quadratic(a: Float, b: Float, c: Float) -> Option<(Float, Float)> {
    let a = a as f64;
    let b = b as f64;
    let c = c as f64;
    let discrim: f64 = b * b - 4.0 * a * c;
    if discrim < 0.0 {
        return None;
    }
    let root_discrim = f64::sqrt(discrim);
    let q = if b < 0.0 {
        -0.5 * (b - root_discrim)
    } else {
        -0.5 * (b + root_discrim)
    };
    let mut t0 = q / a;
    let mut t1 = c / q;
    if t0 > t1 {
        std::mem::swap(&mut t0, &mut t1);
    }
    return Some((t0 as Float, t1 as Float));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        assert_eq!(to_byte(0.0), 0);
        assert_eq!(to_byte(1.0), 255);
        assert_eq!(to_byte(7.0), 255);
        assert_eq!(to_byte(-1.0), 0);
    }

    #[test]
    fn test_002() {
        // (t - 1)(t - 3)
        let (t0, t1) = quadratic(1.0, -4.0, 3.0).unwrap();
        assert!((t0 - 1.0).abs() < 1e-6);
        assert!((t1 - 3.0).abs() < 1e-6);
        assert!(quadratic(1.0, 0.0, 1.0).is_none());
    }
}
