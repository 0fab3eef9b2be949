use super::write_image_exr::*;
use crate::core::base::*;
use crate::core::error::*;
use crate::core::misc::*;

use image::*;
use log::*;
use std::path::Path;

impl From<image::ImageError> for OkapiError {
    fn from(value: image::ImageError) -> Self {
        let msg = value.to_string();
        return OkapiError::error(&msg);
    }
}

pub fn write_image_bytes(
    name: &str,
    rgb: &[Float],
    width: usize,
    height: usize,
) -> Result<(), OkapiError> {
    let byte_img: Vec<u8> = rgb.iter().map(|v| to_byte(*v)).collect();
    match RgbImage::from_vec(width as u32, height as u32, byte_img) {
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

pub fn write_image(
    name: &str,
    rgb: &[Float],
    width: usize,
    height: usize,
) -> Result<(), OkapiError> {
    info!("Writing image {} ({}x{})", name, width, height);
    if let Some(ext) = Path::new(name).extension() {
        if let Some(s) = ext.to_str() {
            match s.to_ascii_lowercase().as_str() {
                "exr" | "hdr" => {
                    return write_image_exr(name, rgb, width, height);
                }
                _ => return write_image_bytes(name, rgb, width, height),
            }
        }
    }
    let msg = format!("Image file \"{}\" has no extension.", name);
    return Err(OkapiError::error(&msg));
}
