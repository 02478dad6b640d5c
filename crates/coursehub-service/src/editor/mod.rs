//! Tree editor: staged edits to one course, saved with a single upsert.

pub mod registry;
pub mod service;
pub mod state;
pub mod tree_editor;

pub use registry::EditorRegistry;
pub use service::EditorService;
pub use state::{
    CourseDeletion, DrillPath, EditSession, EditState, EditorStatus, SaveOutcome, SaveTicket,
};
pub use tree_editor::TreeEditor;
