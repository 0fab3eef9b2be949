use crate::core::geometry::*;

pub type Float = f32;
pub type Vector2i = Vector2<i32>;
pub type Point2i = Vector2<i32>;
pub type Vector2f = Vector2<Float>;
pub type Point2f = Vector2<Float>;

pub type Vector3f = Vector3<Float>;
pub type Point3f = Vector3<Float>;
pub type Normal3f = Vector3<Float>;

pub type Bounds2i = Bounds2<i32>;
pub type Bounds2f = Bounds2<Float>;
