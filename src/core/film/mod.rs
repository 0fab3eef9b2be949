pub mod film;
pub mod film_tile;
pub mod tile_generator;

pub use film::*;
pub use film_tile::*;
pub use tile_generator::*;
