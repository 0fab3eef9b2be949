use crate::core::base::*;
use std::fmt;
use std::ops;

const YWEIGHT: [f32; 3] = [0.212671, 0.715160, 0.072169];

#[derive(Debug, PartialEq, Copy, Clone)]
pub struct RGBSpectrum {
    c: [f32; 3],
}

impl RGBSpectrum {
    pub const N_SAMPLES: usize = 3;

    #[inline]
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        RGBSpectrum { c: [r, g, b] }
    }

    #[inline]
    pub fn zero() -> Self {
        RGBSpectrum { c: [0.0, 0.0, 0.0] }
    }

    #[inline]
    pub fn one() -> Self {
        RGBSpectrum { c: [1.0, 1.0, 1.0] }
    }

    pub fn clamp(&self, low: Float, hi: Float) -> Self {
        let c = &self.c;
        let mut r: [Float; 3] = [0.0; 3];
        for i in 0..c.len() {
            r[i] = Float::clamp(c[i], low, hi);
        }
        return RGBSpectrum::from(r);
    }

    /// Luminance.
    pub fn y(&self) -> Float {
        let c = &self.c;
        return YWEIGHT[0] * c[0] + YWEIGHT[1] * c[1] + YWEIGHT[2] * c[2];
    }

    pub fn to_rgb(&self) -> [Float; 3] {
        return self.c;
    }

    pub fn to_vec(&self) -> Vec<f32> {
        return self.c.to_vec();
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        let c = &self.c;
        return c.iter().all(|x| -> bool { x.abs() <= 0.0 });
    }

    pub fn is_valid(&self) -> bool {
        let c = &self.c;
        return c.iter().all(|x| -> bool { x.is_finite() });
    }

    pub fn near_equal(a: &RGBSpectrum, b: &RGBSpectrum, eps: f32) -> bool {
        let s = a
            .c
            .iter()
            .zip(b.c.iter())
            .map(|(x, y)| -> f32 { f32::abs(x - y) })
            .sum::<f32>()
            / 3.0;
        return s < eps;
    }
}

impl fmt::Display for RGBSpectrum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.c[0], self.c[1], self.c[2])
    }
}

impl ops::Index<usize> for RGBSpectrum {
    type Output = Float;
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        return &self.c[i];
    }
}

impl ops::IndexMut<usize> for RGBSpectrum {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        return &mut self.c[i];
    }
}

impl ops::Mul<Float> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn mul(self, s: f32) -> RGBSpectrum {
        return RGBSpectrum::from([self[0] * s, self[1] * s, self[2] * s]);
    }
}

impl ops::Mul<RGBSpectrum> for Float {
    type Output = RGBSpectrum;
    #[inline]
    fn mul(self, rhs: RGBSpectrum) -> RGBSpectrum {
        return RGBSpectrum::from([self * rhs[0], self * rhs[1], self * rhs[2]]);
    }
}

impl ops::Add<RGBSpectrum> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn add(self, s: RGBSpectrum) -> RGBSpectrum {
        let a = &self;
        let b = &s;
        return RGBSpectrum::from([a[0] + b[0], a[1] + b[1], a[2] + b[2]]);
    }
}

impl ops::Sub<RGBSpectrum> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn sub(self, s: RGBSpectrum) -> RGBSpectrum {
        let a = &self;
        let b = &s;
        return RGBSpectrum::from([a[0] - b[0], a[1] - b[1], a[2] - b[2]]);
    }
}

impl ops::Mul<RGBSpectrum> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn mul(self, s: RGBSpectrum) -> RGBSpectrum {
        let a = &self;
        let b = &s;
        return RGBSpectrum::from([a[0] * b[0], a[1] * b[1], a[2] * b[2]]);
    }
}

impl ops::AddAssign<RGBSpectrum> for RGBSpectrum {
    #[inline]
    fn add_assign(&mut self, s: RGBSpectrum) {
        let a = self;
        let b = &s;
        a[0] += b[0];
        a[1] += b[1];
        a[2] += b[2];
    }
}

impl ops::MulAssign<Float> for RGBSpectrum {
    #[inline]
    fn mul_assign(&mut self, s: Float) {
        let a = self;
        a[0] *= s;
        a[1] *= s;
        a[2] *= s;
    }
}

impl Default for RGBSpectrum {
    #[inline]
    fn default() -> Self {
        RGBSpectrum::zero()
    }
}

impl From<f32> for RGBSpectrum {
    #[inline]
    fn from(value: f32) -> Self {
        RGBSpectrum {
            c: [value, value, value],
        }
    }
}

impl From<[f32; 3]> for RGBSpectrum {
    #[inline]
    fn from(value: [f32; 3]) -> Self {
        RGBSpectrum { c: value }
    }
}

impl From<&[f32]> for RGBSpectrum {
    /// Takes the first three values; missing channels are zero.
    #[inline]
    fn from(value: &[f32]) -> Self {
        let mut c = [0.0; 3];
        for (i, v) in value.iter().take(3).enumerate() {
            c[i] = *v;
        }
        RGBSpectrum { c }
    }
}

impl From<Vector3f> for RGBSpectrum {
    #[inline]
    fn from(value: Vector3f) -> Self {
        RGBSpectrum {
            c: [value.x, value.y, value.z],
        }
    }
}
