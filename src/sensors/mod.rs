pub mod create_sensor;
pub mod perspective;

pub use create_sensor::*;
pub use perspective::*;
