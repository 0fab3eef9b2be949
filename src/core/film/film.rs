use super::film_tile::*;
use crate::core::base::*;
use crate::core::error::*;
use crate::core::filter::*;
use crate::core::param_set::*;

use log::*;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Image sized accumulation buffer plus output settings.
pub struct Film {
    tile: FilmTile,
    filename: String,
    filter: Arc<dyn Filter>,
    channel_names: Vec<String>,
}

impl Film {
    pub fn new(size: &Vector2i, filename: &str, filter: &Arc<dyn Filter>) -> Self {
        let film_bounds = Bounds2i::new(&Point2i::zero(), size);
        let tile = FilmTile::new(
            &Point2i::zero(),
            size,
            RGB_CHANNEL_COUNT,
            filter,
            &film_bounds,
        );
        Film {
            tile,
            filename: String::from(filename),
            filter: Arc::clone(filter),
            channel_names: Vec::new(),
        }
    }

    pub fn from_params(params: &ParamSet, filter: &Arc<dyn Filter>) -> Result<Self, OkapiError> {
        let tile = FilmTile::from_params(params, filter, RGB_CHANNEL_COUNT)?;
        let filename = params.find_one_string("filename", "out.png");
        Ok(Film {
            tile,
            filename,
            filter: Arc::clone(filter),
            channel_names: Vec::new(),
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn filter(&self) -> Arc<dyn Filter> {
        Arc::clone(&self.filter)
    }

    /// Names of the channels, used to label the extra AOV images.
    pub fn set_channel_names(&mut self, names: &[String]) {
        self.channel_names = names.to_vec();
    }

    fn aov_filename(&self, group: usize) -> String {
        let label = match self.channel_names.get(3 * group) {
            Some(name) => name.split('.').next().unwrap_or(name).to_string(),
            None => format!("aov{}", group),
        };
        let path = Path::new(&self.filename);
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("out");
        let file = match path.extension().and_then(|s| s.to_str()) {
            Some(ext) => format!("{}_{}.{}", stem, label, ext),
            None => format!("{}_{}", stem, label),
        };
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                dir.join(file).to_string_lossy().into_owned()
            }
            _ => file,
        }
    }

    /// Stores the color channels to `filename` and every further group of
    /// three channels next to it. Returns the written file names.
    pub fn write_image(&self) -> Result<Vec<String>, OkapiError> {
        info!("Converting image to RGB and computing final weighted pixel values");
        let mut written = Vec::new();
        let groups = self.tile.channel_count() / RGB_CHANNEL_COUNT;
        for group in 0..groups {
            let name = if group == 0 {
                self.filename.clone()
            } else {
                self.aov_filename(group)
            };
            let image = self.tile.image(group * RGB_CHANNEL_COUNT);
            image.store(&name)?;
            written.push(name);
        }
        if self.tile.channel_count() % RGB_CHANNEL_COUNT != 0 {
            warn!(
                "{} trailing channels are not written.",
                self.tile.channel_count() % RGB_CHANNEL_COUNT
            );
        }
        return Ok(written);
    }
}

impl Deref for Film {
    type Target = FilmTile;
    fn deref(&self) -> &FilmTile {
        &self.tile
    }
}

impl DerefMut for Film {
    fn deref_mut(&mut self) -> &mut FilmTile {
        &mut self.tile
    }
}

impl fmt::Display for Film {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Film")
    }
}

pub fn create_film(
    params: &ParamSet,
    filter: &Arc<dyn Filter>,
) -> Result<Arc<RwLock<Film>>, OkapiError> {
    let film = Film::from_params(params, filter)?;
    info!(
        "Created film {}x{} -> {}",
        film.width(),
        film.height(),
        film.filename()
    );
    return Ok(Arc::new(RwLock::new(film)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::spectrum::*;
    use crate::filters::*;

    fn box_filter() -> Arc<dyn Filter> {
        Arc::new(BoxFilter::new(&Vector2f::new(1.0, 1.0)))
    }

    #[test]
    fn test_001() {
        let mut params = ParamSet::new();
        params.add_int("width", 33);
        params.add_int("height", 22);
        params.add_string("filename", "out.exr");
        let film = create_film(&params, &box_filter()).unwrap();
        let film = film.read().unwrap();
        assert_eq!(film.size(), Vector2i::new(33, 22));
        assert_eq!(film.offset(), Point2i::zero());
        assert_eq!(film.filename(), "out.exr");
        assert_eq!(film.tile_bounds(), Bounds2i::from(((0, 0), (33, 22))));
        assert_eq!(film.filter().get_radius(), Vector2f::new(1.0, 1.0));
        assert_eq!(format!("{}", film), "Film");
    }

    #[test]
    fn test_002() {
        let params = ParamSet::new();
        let film = Film::from_params(&params, &box_filter()).unwrap();
        assert_eq!(film.size(), Vector2i::new(800, 600));
        assert_eq!(film.filename(), "out.png");
        assert_eq!(film.channel_count(), 3);

        let mut params = ParamSet::new();
        params.add_int("width", -1);
        assert!(Film::from_params(&params, &box_filter()).is_err());
    }

    #[test]
    fn test_003() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("film.exr");
        let mut film = Film::new(&Vector2i::new(4, 4), path.to_str().unwrap(), &box_filter());
        film.allocate_image_tensor_memory(6);
        film.set_channel_names(&[
            "color.r".to_string(),
            "color.g".to_string(),
            "color.b".to_string(),
            "normal.x".to_string(),
            "normal.y".to_string(),
            "normal.z".to_string(),
        ]);
        film.add_sample(&Point2f::new(1.5, 1.5), &[1.0, 0.5, 0.25, 0.0, 1.0, 0.0]);
        let written = film.write_image().unwrap();
        assert_eq!(written.len(), 2);
        assert!(written[1].ends_with("film_normal.exr"));
        for name in written.iter() {
            assert!(Path::new(name).exists());
        }
        let img = image::open(&written[1]).unwrap().to_rgb32f();
        assert_eq!(img.get_pixel(1, 1).0, [0.0, 1.0, 0.0]);
        assert_eq!(film.image(0).get_pixel(1, 1), Spectrum::new(1.0, 0.5, 0.25));
    }
}
