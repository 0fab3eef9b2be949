pub mod core;
pub mod filters;
pub mod integrators;
pub mod intersectors;
pub mod samplers;
pub mod sensors;
