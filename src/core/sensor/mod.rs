pub mod sensor;

pub use sensor::*;
