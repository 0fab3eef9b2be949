pub mod create_sampler;
pub mod independent;

pub use create_sampler::*;
pub use independent::*;
