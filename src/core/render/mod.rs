pub mod render;
pub mod render_description;

pub use render::*;
pub use render_description::*;
