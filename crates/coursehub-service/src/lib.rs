//! # coursehub-service
//!
//! Service layer for CourseHub: the tree editor that stages course edits,
//! the catalog service behind the public pages, and the admin gate.
//!
//! Services receive their dependencies at construction time as `Arc`s.

pub mod admin;
pub mod catalog;
pub mod context;
pub mod editor;

pub use admin::AdminGate;
pub use catalog::{CatalogService, CategoryInfo, LessonView};
pub use context::AdminContext;
pub use editor::{
    CourseDeletion, DrillPath, EditSession, EditState, EditorRegistry, EditorService, EditorStatus, SaveOutcome,
    SaveTicket, TreeEditor,
};
