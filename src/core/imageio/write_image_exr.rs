use crate::core::base::*;
use crate::core::error::*;

use image::*;

/// Stores linear float values without tone mapping.
pub fn write_image_exr(
    name: &str,
    rgb: &[Float],
    width: usize,
    height: usize,
) -> Result<(), OkapiError> {
    let float_img: Vec<f32> = rgb.iter().map(|v| *v as f32).collect();
    match Rgb32FImage::from_vec(width as u32, height as u32, float_img) {
        Some(img) => {
            img.save(name)?;
            return Ok(());
        }
        None => {
            let msg = format!("Image buffer does not match {}x{}.", width, height);
            return Err(OkapiError::error(&msg));
        }
    }
}
