use super::write_image::write_image;
use crate::core::base::*;
use crate::core::error::*;
use crate::core::spectrum::*;

/// Row-major RGB float image.
#[derive(Debug, Clone, PartialEq)]
pub struct Image3f {
    width: usize,
    height: usize,
    pixels: Vec<Spectrum>,
}

impl Image3f {
    pub fn new(width: usize, height: usize) -> Self {
        Image3f {
            width,
            height,
            pixels: vec![Spectrum::zero(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Spectrum {
        assert!(x < self.width && y < self.height);
        return self.pixels[y * self.width + x];
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, c: &Spectrum) {
        assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x] = *c;
    }

    /// Interleaved `r, g, b` values.
    pub fn to_rgb_vec(&self) -> Vec<Float> {
        let mut rgb = Vec::with_capacity(3 * self.pixels.len());
        for p in self.pixels.iter() {
            rgb.extend_from_slice(&p.to_rgb());
        }
        return rgb;
    }

    /// Writes the image; the encoding follows the file extension.
    pub fn store(&self, filename: &str) -> Result<(), OkapiError> {
        return write_image(filename, &self.to_rgb_vec(), self.width, self.height);
    }
}
