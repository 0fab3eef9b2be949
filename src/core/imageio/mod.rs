pub mod image3f;
pub mod write_image;
pub mod write_image_exr;

pub use image3f::*;
pub use write_image::*;
