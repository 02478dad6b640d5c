//! Subject (unit) entities.

pub mod model;

pub use model::{Subject, SubjectField};
