pub mod scene;
pub mod scene_description;
pub mod scene_loader;

pub use scene::*;
pub use scene_description::*;
pub use scene_loader::*;
