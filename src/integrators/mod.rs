pub mod aov;
pub mod constant;
pub mod create_integrator;
pub mod normal;

pub use aov::*;
pub use constant::*;
pub use create_integrator::*;
pub use normal::*;
