//! Lesson module entities.

pub mod model;
pub mod resource;

pub use model::{Module, ModuleField};
pub use resource::is_available;
