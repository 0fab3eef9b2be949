pub mod base;
pub mod error;
pub mod film;
pub mod filter;
pub mod geometry;
pub mod imageio;
pub mod integrator;
pub mod intersector;
pub mod misc;
pub mod param_set;
pub mod prelude;
pub mod render;
pub mod rng;
pub mod sampler;
pub mod scene;
pub mod sensor;
pub mod spectrum;
