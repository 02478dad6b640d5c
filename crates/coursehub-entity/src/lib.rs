//! # coursehub-entity
//!
//! Domain models for CourseHub. A [`Course`](course::Course) holds an
//! ordered list of [`Subject`](subject::Subject)s, each holding an ordered
//! list of lesson [`Module`](module::Module)s.
//!
//! Every edit operation takes `&self` and returns a new value, so an
//! in-progress edit can be dropped without touching the original.

pub mod course;
pub mod module;
pub mod sequence;
pub mod subject;

pub use course::{Category, Course, CourseField, CourseOutline, LessonPosition};
pub use module::{Module, ModuleField};
pub use sequence::Placement;
pub use subject::{Subject, SubjectField};
