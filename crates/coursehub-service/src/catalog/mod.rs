//! Read and write access to published courses.

pub mod service;

pub use service::{CatalogService, CategoryInfo, LessonView};
