pub mod intersector;

pub use intersector::*;
