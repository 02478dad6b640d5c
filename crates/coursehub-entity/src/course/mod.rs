//! Course domain entities.

pub mod category;
pub mod model;
pub mod outline;

pub use category::Category;
pub use model::{Course, CourseField};
pub use outline::{CourseOutline, LessonOutline, LessonPosition, UnitOutline};
