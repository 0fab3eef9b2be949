pub mod box_filter;
pub mod create_filter;
pub mod gaussian;
pub mod tent;

pub use box_filter::*;
pub use create_filter::create_filter;
pub use gaussian::*;
pub use tent::*;
