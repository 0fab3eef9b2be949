use crate::core::base::*;

pub const PREFERRED_TILE_SIZE: i32 = 40;

#[derive(Debug, PartialEq, Copy, Clone)]
pub struct FilmTileDescription {
    pub offset: Point2i,
    pub size: Vector2i,
}

/// Splits an image into a row-major grid of tiles.
///
/// Tiles in the last column and row are clipped to the image size.
#[derive(Debug, Clone)]
pub struct TileGenerator {
    preferred_tile_size: Vector2i,
    film_size: Vector2i,
    cols: i32,
    rows: i32,
}

fn div_ceil(a: i32, b: i32) -> i32 {
    return a / b + if a % b != 0 { 1 } else { 0 };
}

impl TileGenerator {
    pub fn new(preferred_tile_size: &Vector2i, film_size: &Vector2i) -> Self {
        assert!(preferred_tile_size.x > 0 && preferred_tile_size.y > 0);
        TileGenerator {
            preferred_tile_size: *preferred_tile_size,
            film_size: *film_size,
            cols: div_ceil(film_size.x, preferred_tile_size.x),
            rows: div_ceil(film_size.y, preferred_tile_size.y),
        }
    }

    pub fn tile_count(&self) -> usize {
        return (self.cols * self.rows) as usize;
    }

    pub fn preferred_tile_size(&self) -> Vector2i {
        self.preferred_tile_size
    }

    pub fn tile_description(&self, tile_index: usize) -> FilmTileDescription {
        assert!(tile_index < self.tile_count());
        let index = tile_index as i32;
        let ix = index % self.cols;
        let iy = index / self.cols;

        let offset = Point2i::new(ix * self.preferred_tile_size.x, iy * self.preferred_tile_size.y);
        let mut size = self.preferred_tile_size;
        if ix == self.cols - 1 {
            size.x = self.film_size.x - offset.x;
        }
        if iy == self.rows - 1 {
            size.y = self.film_size.y - offset.y;
        }
        return FilmTileDescription { offset, size };
    }

    pub fn iter(&self) -> impl Iterator<Item = FilmTileDescription> + '_ {
        return (0..self.tile_count()).map(move |i| self.tile_description(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let tg = TileGenerator::new(&Vector2i::new(32, 32), &Vector2i::new(64, 64));
        assert_eq!(tg.tile_count(), 4);
        let d = tg.tile_description(3);
        assert_eq!(d.offset, Point2i::new(32, 32));
        assert_eq!(d.size, Vector2i::new(32, 32));
    }

    #[test]
    fn test_002() {
        let tg = TileGenerator::new(&Vector2i::new(40, 40), &Vector2i::new(100, 50));
        assert_eq!(tg.tile_count(), 6);
        let d = tg.tile_description(2);
        assert_eq!(d.offset, Point2i::new(80, 0));
        assert_eq!(d.size, Vector2i::new(20, 40));
        let d = tg.tile_description(5);
        assert_eq!(d.offset, Point2i::new(80, 40));
        assert_eq!(d.size, Vector2i::new(20, 10));
        assert_eq!(tg.iter().count(), 6);
    }

    #[test]
    #[should_panic]
    fn test_003() {
        let tg = TileGenerator::new(&Vector2i::new(32, 32), &Vector2i::new(64, 64));
        tg.tile_description(4);
    }
}
