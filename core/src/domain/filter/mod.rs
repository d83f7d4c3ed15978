pub mod engine;
pub mod entities;
pub mod spec;

pub use engine::transform;
