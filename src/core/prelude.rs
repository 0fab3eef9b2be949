pub use super::base::*;
pub use super::error::*;
pub use super::film::*;
pub use super::filter::*;
pub use super::geometry::*;
pub use super::imageio::*;
pub use super::integrator::*;
pub use super::intersector::*;
pub use super::misc::*;
pub use super::param_set::*;
pub use super::render::*;
pub use super::rng::*;
pub use super::sampler::*;
pub use super::scene::*;
pub use super::sensor::*;
pub use super::spectrum::*;
