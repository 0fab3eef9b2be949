use crate::core::base::*;
use crate::core::error::*;
use crate::core::filter::*;
use crate::core::imageio::*;
use crate::core::param_set::*;
use crate::core::spectrum::*;

use std::sync::Arc;

/// Rectangular region of the image that accumulates filtered samples.
///
/// The tile owns the pixels `offset .. offset + size` but stores a border of
/// neighbouring pixels as well (`tile_bounds`), so that samples near the tile
/// edge can spread into adjacent tiles. Channel values are stored as
/// `[height][width][channel]` over the storage bounds, next to one filter
/// weight sum per stored pixel.
pub struct FilmTile {
    offset: Point2i,
    size: Vector2i,
    channel_count: usize,
    filter: Arc<dyn Filter>,
    film_bounds: Bounds2i,
    tile_bounds: Bounds2i,
    border: Vector2i,
    pixels: Vec<Float>,
    filter_weight_sums: Vec<Float>,
}

impl FilmTile {
    /// The tile is always clipped to `film_bounds`.
    pub fn new(
        offset: &Point2i,
        size: &Vector2i,
        channel_count: usize,
        filter: &Arc<dyn Filter>,
        film_bounds: &Bounds2i,
    ) -> Self {
        let mut tile = FilmTile {
            offset: *offset,
            size: *size,
            channel_count,
            filter: Arc::clone(filter),
            film_bounds: *film_bounds,
            tile_bounds: Bounds2i::default(),
            border: Vector2i::zero(),
            pixels: Vec::new(),
            filter_weight_sums: Vec::new(),
        };
        tile.tile_bounds = tile.tile_bounds();
        tile.border = tile.offset - tile.tile_bounds.min;
        assert!(tile.border.x >= 0 && tile.border.y >= 0);

        let pixel_count = tile.storage_pixel_count();
        tile.filter_weight_sums = vec![0.0; pixel_count];
        tile.allocate_image_tensor_memory(channel_count);
        return tile;
    }

    /// Full image tile built from `width` and `height`.
    pub fn from_params(
        params: &ParamSet,
        filter: &Arc<dyn Filter>,
        channel_count: usize,
    ) -> Result<Self, OkapiError> {
        let width = params.find_one_int("width", 800);
        let height = params.find_one_int("height", 600);
        if width < 0 || height < 0 {
            let msg = format!("Invalid film size {}x{}.", width, height);
            return Err(OkapiError::error(&msg));
        }
        let size = Vector2i::new(width, height);
        let film_bounds = Bounds2i::new(&Point2i::zero(), &size);
        return Ok(FilmTile::new(
            &Point2i::zero(),
            &size,
            channel_count,
            filter,
            &film_bounds,
        ));
    }

    fn storage_pixel_count(&self) -> usize {
        let w = i32::max(0, self.tile_bounds.width());
        let h = i32::max(0, self.tile_bounds.height());
        return (w * h) as usize;
    }

    /// Reallocates the channel buffer; all channel values are reset to 0.
    pub fn allocate_image_tensor_memory(&mut self, channel_count: usize) {
        self.channel_count = channel_count;
        self.pixels = vec![0.0; self.storage_pixel_count() * channel_count];
    }

    pub fn clear(&mut self) {
        self.pixels.iter_mut().for_each(|v| *v = 0.0);
        self.filter_weight_sums.iter_mut().for_each(|v| *v = 0.0);
    }

    pub fn offset(&self) -> Point2i {
        self.offset
    }

    pub fn size(&self) -> Vector2i {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }

    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    pub fn filter(&self) -> &Arc<dyn Filter> {
        &self.filter
    }

    pub fn film_bounds(&self) -> Bounds2i {
        self.film_bounds
    }

    pub fn pixel_bounds(&self) -> Bounds2i {
        Bounds2i::new(&self.offset, &(self.offset + self.size))
    }

    /// Pixels a sample at `offset` or `offset + size` can reach.
    pub fn tile_bounds(&self) -> Bounds2i {
        let b0 = self.sample_bounds(&self.offset.to_f32());
        let b1 = self.sample_bounds(&(self.offset + self.size).to_f32());
        return Bounds2i::new(&b0.min, &b1.max);
    }

    /// Pixels whose center may receive weight from a sample at `p`, clipped
    /// to the film.
    pub fn sample_bounds(&self, p: &Point2f) -> Bounds2i {
        let radius = self.filter.get_radius();
        let half = Vector2f::from(0.5);
        let min = (*p - radius + half).floor_to_i32();
        let max = (*p + radius - half + Vector2f::from(1.0)).floor_to_i32();
        let min = Vector2i::max(&min, &self.film_bounds.min);
        let max = Vector2i::min(&max, &self.film_bounds.max);
        return Bounds2i::new(&min, &max);
    }

    /// Index into the weight buffer for a pixel in film coordinates.
    #[inline]
    fn storage_index(&self, x: i32, y: i32) -> usize {
        let tx = x + self.border.x - self.offset.x;
        let ty = y + self.border.y - self.offset.y;
        debug_assert!(tx >= 0 && ty >= 0);
        return (ty * self.tile_bounds.width() + tx) as usize;
    }

    #[inline]
    fn splat(&mut self, index: usize, weight: Float, values: &[Float]) {
        self.filter_weight_sums[index] += weight;
        let base = index * self.channel_count;
        for c in 0..self.channel_count {
            self.pixels[base + c] += weight * values[c];
        }
    }

    /// Splats `values` (one per channel) at the film position `p`.
    pub fn add_sample(&mut self, p: &Point2f, values: &[Float]) {
        assert!(values.len() >= self.channel_count);
        let bounds = self.sample_bounds(p).intersect(&self.tile_bounds);
        for y in bounds.min.y..bounds.max.y {
            for x in bounds.min.x..bounds.max.x {
                let d = Point2f::new(x as Float + 0.5 - p.x, y as Float + 0.5 - p.y);
                let weight = self.filter.evaluate(&d);
                if weight > 0.0 {
                    let index = self.storage_index(x, y);
                    self.splat(index, weight, values);
                }
            }
        }
    }

    /// Reference for `add_sample` that visits every pixel of the tile.
    pub fn add_sample_slow_but_correct(&mut self, p: &Point2f, values: &[Float]) {
        assert!(values.len() >= self.channel_count);
        let radius = self.filter.get_radius();
        for y in 0..self.height() {
            for x in 0..self.width() {
                let px = self.offset.x + x;
                let py = self.offset.y + y;
                let d = Point2f::new(px as Float + 0.5 - p.x, py as Float + 0.5 - p.y);
                if Float::abs(d.x) > radius.x || Float::abs(d.y) > radius.y {
                    continue;
                }
                let weight = self.filter.evaluate(&d);
                if weight > 0.0 {
                    let index = self.storage_index(px, py);
                    self.splat(index, weight, values);
                }
            }
        }
    }

    /// Adds the weights and channel sums of `other` to this tile.
    pub fn add_tile(&mut self, other: &FilmTile) {
        assert_eq!(self.channel_count, other.channel_count);
        let src_bounds = other.tile_bounds;
        let src_width = src_bounds.width();
        let channel_count = self.channel_count;
        for y in src_bounds.min.y..src_bounds.max.y {
            for x in src_bounds.min.x..src_bounds.max.x {
                let src = ((y - src_bounds.min.y) * src_width + (x - src_bounds.min.x)) as usize;
                let weight = other.filter_weight_sums[src];
                if weight <= 0.0 {
                    continue;
                }
                if !self.tile_bounds.inside_exclusive(&Point2i::new(x, y)) {
                    continue;
                }
                let dst = self.storage_index(x, y);
                self.filter_weight_sums[dst] += weight;
                let src_base = src * channel_count;
                let dst_base = dst * channel_count;
                for c in 0..channel_count {
                    self.pixels[dst_base + c] += other.pixels[src_base + c];
                }
            }
        }
    }

    /// Normalized RGB image of the tile's own pixels, read from the three
    /// channels starting at `channel_start`.
    pub fn image(&self, channel_start: usize) -> Image3f {
        assert!(channel_start + 3 <= self.channel_count);
        let width = i32::max(0, self.width()) as usize;
        let height = i32::max(0, self.height()) as usize;
        let mut image = Image3f::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let px = self.offset.x + x as i32;
                let py = self.offset.y + y as i32;
                let index = self.storage_index(px, py);
                let total_weight = self.filter_weight_sums[index];
                if total_weight != 0.0 {
                    let base = index * self.channel_count + channel_start;
                    let c = Spectrum::from(&self.pixels[base..base + 3]);
                    image.set_pixel(x, y, &((1.0 / total_weight) * c));
                }
            }
        }
        return image;
    }

    /// Normalized channel vector of the pixel `p`, relative to the tile
    /// offset.
    pub fn sample_color(&self, p: &Point2i) -> Vec<Float> {
        let index = self.storage_index(self.offset.x + p.x, self.offset.y + p.y);
        let total_weight = self.filter_weight_sums[index];
        let base = index * self.channel_count;
        let values = &self.pixels[base..base + self.channel_count];
        if total_weight != 0.0 {
            return values.iter().map(|v| *v / total_weight).collect();
        }
        return vec![0.0; self.channel_count];
    }

    /// Unnormalized sums of three channels over the storage bounds.
    pub fn radiance_sums(&self, channel_start: usize) -> Vec<Spectrum> {
        assert!(channel_start + 3 <= self.channel_count);
        return self
            .pixels
            .chunks_exact(self.channel_count)
            .map(|p| Spectrum::from(&p[channel_start..channel_start + 3]))
            .collect();
    }

    pub fn filter_weight_sums(&self) -> &[Float] {
        &self.filter_weight_sums
    }
}
