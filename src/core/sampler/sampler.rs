use crate::core::base::*;

use std::fmt;

/// Source of sample values in `[0, 1)`.
///
/// Render jobs never share a sampler; each tile gets its own copy through
/// `clone_with_seed` so results do not depend on scheduling order.
pub trait Sampler: Send + Sync + fmt::Display {
    /// Samples per pixel.
    fn sample_count(&self) -> u32;
    fn next_1d(&mut self) -> Float;
    fn next_2d(&mut self) -> Point2f;
    fn clone_sampler(&self) -> Box<dyn Sampler>;
    fn clone_with_seed(&self, seed: u64) -> Box<dyn Sampler>;
}
