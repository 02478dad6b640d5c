//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use coursehub_entity::Placement;

/// Admin login body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Admin login name.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Admin password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Catalog search query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Text to match against title or category.
    pub q: Option<String>,
}

/// Body for adding a subject or module.
///
/// `position` is 0-based and clamped; omitted means append.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddItemRequest {
    /// Insertion index.
    #[serde(default)]
    pub position: Option<usize>,
}

impl AddItemRequest {
    /// The placement this request asks for.
    pub fn placement(&self) -> Placement {
        self.position.map_or(Placement::End, Placement::At)
    }
}

/// Body for a drag-reorder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Current index.
    pub from: usize,
    /// Target index; clamped to the last position.
    pub to: usize,
}

/// Body for a single text-field edit.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SetFieldRequest {
    /// Field name, e.g. `title` or `contentTitle`.
    #[validate(length(min = 1, message = "Field name is required"))]
    pub field: String,
    /// New value; may be empty.
    #[serde(default)]
    pub value: String,
}

/// Body for naming a new course.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SetCourseIdRequest {
    /// Course id; also the store key.
    #[validate(length(min = 1, max = 200, message = "Course id must be 1-200 characters"))]
    pub id: String,
}
