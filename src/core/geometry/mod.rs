pub mod bounds2;
pub mod numeric_traits;
pub mod ray;
pub mod vector2;
pub mod vector3;

pub use bounds2::*;
pub use ray::*;
pub use vector2::*;
pub use vector3::*;
