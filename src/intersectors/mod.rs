pub mod brute_force;
pub mod create_intersector;
pub mod sphere;

pub use brute_force::*;
pub use create_intersector::*;
pub use sphere::*;
