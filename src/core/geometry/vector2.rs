use super::numeric_traits::*;
use std::ops;

#[derive(Debug, PartialEq, Default, Copy, Clone)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> Vector2<T> {
    pub fn new(x: T, y: T) -> Self {
        Vector2::<T> { x, y }
    }
}

impl<T: Default> Vector2<T> {
    #[inline]
    pub fn zero() -> Self {
        Vector2::<T> {
            x: T::default(),
            y: T::default(),
        }
    }
}

impl<T: Copy + NumberType> Vector2<T> {
    #[inline]
    pub fn abs(&self) -> Self {
        Vector2::<T> {
            x: NumberType::abs(self.x),
            y: NumberType::abs(self.y),
        }
    }
}

impl<T: Copy + PartialOrd> Vector2<T> {
    #[inline]
    pub fn min(a: &Self, b: &Self) -> Self {
        let x = if a.x <= b.x { a.x } else { b.x };
        let y = if a.y <= b.y { a.y } else { b.y };
        Vector2::<T> { x, y }
    }

    #[inline]
    pub fn max(a: &Self, b: &Self) -> Self {
        let x = if a.x >= b.x { a.x } else { b.x };
        let y = if a.y >= b.y { a.y } else { b.y };
        Vector2::<T> { x, y }
    }
}

impl<
        T: Copy
            + FloatType
            + std::ops::Add<Output = T>
            + std::ops::Sub<Output = T>
            + std::ops::Mul<Output = T>
            + std::ops::Div<Output = T>,
    > Vector2<T>
{
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        return self.x * rhs.x + self.y * rhs.y;
    }

    #[inline]
    pub fn length(&self) -> T {
        return FloatType::sqrt(self.x * self.x + self.y * self.y);
    }
}

impl Vector2<f32> {
    /// Rounds both components down to the next integer pixel coordinate.
    #[inline]
    pub fn floor_to_i32(&self) -> Vector2<i32> {
        Vector2::<i32> {
            x: FloatType::floor(self.x) as i32,
            y: FloatType::floor(self.y) as i32,
        }
    }
}

impl Vector2<i32> {
    #[inline]
    pub fn to_f32(&self) -> Vector2<f32> {
        Vector2::<f32> {
            x: self.x as f32,
            y: self.y as f32,
        }
    }
}

// Add
impl<T: std::ops::Add<Output = T>> ops::Add<Vector2<T>> for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn add(self, rhs: Vector2<T>) -> Vector2<T> {
        return Vector2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        };
    }
}

// Sub
impl<T: std::ops::Sub<Output = T>> ops::Sub<Vector2<T>> for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn sub(self, rhs: Vector2<T>) -> Vector2<T> {
        return Vector2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        };
    }
}

// Mul Scalar
impl<T: std::ops::Mul<Output = T> + Copy> ops::Mul<T> for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn mul(self, rhs: T) -> Vector2<T> {
        return Vector2 {
            x: self.x * rhs,
            y: self.y * rhs,
        };
    }
}

impl<T: std::ops::Neg<Output = T>> ops::Neg for Vector2<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        return Vector2 {
            x: -self.x,
            y: -self.y,
        };
    }
}

impl<T: std::ops::AddAssign<T>> ops::AddAssign for Vector2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T> ops::Index<usize> for Vector2<T> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        match i {
            0 => &self.x,
            _ => &self.y,
        }
    }
}

impl<T: Copy> From<T> for Vector2<T> {
    #[inline]
    fn from(value: T) -> Self {
        Vector2::<T>::new(value, value)
    }
}

impl<T: Copy> From<(T, T)> for Vector2<T> {
    #[inline]
    fn from(value: (T, T)) -> Self {
        Vector2::<T>::new(value.0, value.1)
    }
}

impl<T: Copy> From<[T; 2]> for Vector2<T> {
    #[inline]
    fn from(value: [T; 2]) -> Self {
        Vector2::<T>::new(value[0], value[1])
    }
}
