use crate::core::base::*;
use crate::core::film::*;
use crate::core::geometry::*;

use std::fmt;
use std::sync::{Arc, RwLock};

/// Maps raster positions to primary rays and owns the film they land on.
pub trait Sensor: Send + Sync + fmt::Display {
    fn film(&self) -> Arc<RwLock<Film>>;
    fn generate_ray(&self, raster_position: &Point2f) -> Ray;
}
