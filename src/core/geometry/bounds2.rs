use super::vector2::Vector2;

/// Axis aligned rectangle; `min` is inclusive, `max` is exclusive for
/// integer pixel bounds.
#[derive(Debug, PartialEq, Default, Copy, Clone)]
pub struct Bounds2<T> {
    pub min: Vector2<T>,
    pub max: Vector2<T>,
}

impl<T: Copy> Bounds2<T> {
    pub fn new(min: &Vector2<T>, max: &Vector2<T>) -> Self {
        Bounds2::<T> {
            min: *min,
            max: *max,
        }
    }
}

impl<T: Copy + PartialOrd + std::ops::Sub<Output = T>> Bounds2<T> {
    pub fn width(&self) -> T {
        return self.max.x - self.min.x;
    }

    pub fn height(&self) -> T {
        return self.max.y - self.min.y;
    }

    pub fn is_empty(&self) -> bool {
        return self.max.x <= self.min.x || self.max.y <= self.min.y;
    }

    pub fn intersect(&self, other: &Self) -> Self {
        let min = Vector2::<T>::max(&self.min, &other.min);
        let max = Vector2::<T>::min(&self.max, &other.max);
        return Bounds2 { min, max };
    }

    pub fn inside_exclusive(&self, p: &Vector2<T>) -> bool {
        return p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y;
    }

    pub fn contains(&self, other: &Self) -> bool {
        return other.min.x >= self.min.x
            && other.min.y >= self.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y;
    }
}

impl<T: Copy> From<((T, T), (T, T))> for Bounds2<T> {
    fn from(value: ((T, T), (T, T))) -> Self {
        Bounds2::<T> {
            min: Vector2::<T>::from(value.0),
            max: Vector2::<T>::from(value.1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let b = Bounds2::<i32>::from(((3, 3), (9, 9)));
        assert_eq!(b.width(), 6);
        assert_eq!(b.height(), 6);
        assert!(!b.is_empty());
        assert!(b.inside_exclusive(&Vector2::new(3, 8)));
        assert!(!b.inside_exclusive(&Vector2::new(9, 8)));
    }

    #[test]
    fn test_002() {
        let a = Bounds2::<i32>::from(((0, 0), (30, 30)));
        let b = Bounds2::<i32>::from(((27, -1), (33, 5)));
        let c = a.intersect(&b);
        assert_eq!(c, Bounds2::<i32>::from(((27, 0), (30, 5))));
        assert!(a.contains(&c));
        assert!(!c.contains(&a));
    }

    #[test]
    fn test_003() {
        let b = Bounds2::<i32>::from(((4, 4), (4, 10)));
        assert!(b.is_empty());
    }
}
