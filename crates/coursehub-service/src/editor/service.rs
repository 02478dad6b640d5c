//! Async orchestration between one admin's tree editor and the catalog store.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info, warn};

use coursehub_core::error::AppError;
use coursehub_core::result::AppResult;
use coursehub_core::types::CourseId;
use coursehub_database::CatalogStore;

use super::state::{CourseDeletion, EditState, EditorStatus, SaveOutcome};
use super::tree_editor::TreeEditor;

/// Wraps a [`TreeEditor`] for use from async handlers.
///
/// The editor lock is never held across a store call, so edits stay
/// responsive while a save is pending. [`TreeEditor::begin_save`] rejects
/// a second save until the first one is recorded.
#[derive(Debug)]
pub struct EditorService {
    /// Catalog store.
    store: Arc<CatalogStore>,
    /// Editor state.
    editor: Mutex<TreeEditor>,
}

impl EditorService {
    /// Creates an editor service with no open course.
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self {
            store,
            editor: Mutex::new(TreeEditor::new()),
        }
    }

    /// Current edit state.
    pub async fn state(&self) -> EditState {
        self.editor.lock().await.state()
    }

    /// Current edit state with the session flags.
    pub async fn status(&self) -> EditorStatus {
        self.editor.lock().await.status()
    }

    /// Run a synchronous editor operation and return its result.
    pub async fn apply<T>(
        &self,
        operation: impl FnOnce(&mut TreeEditor) -> AppResult<T>,
    ) -> AppResult<T> {
        let mut editor = self.editor.lock().await;
        operation(&mut *editor)
    }

    /// Open a new empty course.
    pub async fn open_new(&self) -> AppResult<EditState> {
        self.apply(TreeEditor::open_new).await
    }

    /// Fetch `id` from the store and open it for editing.
    pub async fn open_existing(&self, id: &CourseId) -> AppResult<EditState> {
        let course = self
            .store
            .find_by_id(id.as_str())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Course '{id}' not found")))?;

        self.apply(|editor| editor.open_existing(course)).await
    }

    /// Save the open course with exactly one store upsert.
    ///
    /// A store failure is returned and the session stays open with its edits.
    pub async fn save(&self) -> AppResult<SaveOutcome> {
        let ticket = self.apply(TreeEditor::begin_save).await?;
        info!(course_id = %ticket.course_id, "Saving course");

        let result = self
            .store
            .upsert(ticket.course_id.as_str(), &ticket.course)
            .await;
        if let Err(e) = &result {
            error!(course_id = %ticket.course_id, error = %e, "Catalog store rejected save");
        }

        self.editor.lock().await.finish_save(ticket, result)
    }

    /// Drop the open course without any store call.
    pub async fn discard(&self) -> bool {
        self.editor.lock().await.discard()
    }

    /// Delete `id` from the store, close any session editing it, and
    /// re-list the catalog.
    ///
    /// A failed delete is returned and the edit session is left untouched.
    /// Once the delete succeeds a failed re-list only leaves `remaining`
    /// empty.
    pub async fn delete_course(&self, id: &CourseId) -> AppResult<CourseDeletion> {
        let removed = self.store.delete_by_id(id.as_str()).await.map_err(|e| {
            error!(course_id = %id, error = %e, "Catalog store rejected delete");
            e
        })?;
        if !removed {
            return Err(AppError::not_found(format!("Course '{id}' not found")));
        }

        self.forget_course(id).await;
        info!(course_id = %id, "Course deleted");

        let remaining = match self.store.list_all().await {
            Ok(courses) => Some(courses),
            Err(e) => {
                warn!(course_id = %id, error = %e, "Catalog re-list after delete failed");
                None
            }
        };
        Ok(CourseDeletion {
            id: id.clone(),
            remaining,
        })
    }

    /// Close the session if it edits the stored course `id`.
    pub async fn forget_course(&self, id: &CourseId) -> bool {
        self.editor.lock().await.forget_course(id)
    }
}
