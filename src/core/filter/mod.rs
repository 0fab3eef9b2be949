pub mod base_filter;
pub mod filter;

pub use base_filter::*;
pub use filter::*;
