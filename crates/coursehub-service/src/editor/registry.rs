//! One editor per admin session.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use coursehub_core::types::CourseId;
use coursehub_database::CatalogStore;

use super::service::EditorService;

/// Maps an admin session token to that session's [`EditorService`].
#[derive(Debug)]
pub struct EditorRegistry {
    store: Arc<CatalogStore>,
    editors: DashMap<String, Arc<EditorService>>,
}

impl EditorRegistry {
    /// Creates an empty registry whose editors write to `store`.
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self {
            store,
            editors: DashMap::new(),
        }
    }

    /// The editor for `session_token`, created on first use.
    pub fn editor_for(&self, session_token: &str) -> Arc<EditorService> {
        self.editors
            .entry(session_token.to_string())
            .or_insert_with(|| {
                debug!("Creating editor for admin session");
                Arc::new(EditorService::new(self.store.clone()))
            })
            .clone()
    }

    /// Drop the editor of an ended admin session, discarding any open course.
    pub fn release(&self, session_token: &str) -> bool {
        self.editors.remove(session_token).is_some()
    }

    /// Drop the editors of every token `is_active` rejects and return how
    /// many were dropped.
    pub fn retain_active(&self, is_active: impl Fn(&str) -> bool) -> usize {
        let before = self.editors.len();
        self.editors.retain(|token, _| is_active(token));
        before.saturating_sub(self.editors.len())
    }

    /// Close every session editing `id` after it was deleted elsewhere.
    pub async fn forget_course(&self, id: &CourseId) -> usize {
        let editors: Vec<Arc<EditorService>> =
            self.editors.iter().map(|e| e.value().clone()).collect();
        let mut closed = 0;
        for editor in editors {
            if editor.forget_course(id).await {
                closed += 1;
            }
        }
        closed
    }

    /// Number of admin sessions with an editor.
    pub fn len(&self) -> usize {
        self.editors.len()
    }

    /// Whether no admin session has an editor.
    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursehub_core::traits::DocumentStore;
    use coursehub_database::MemoryCatalogStore;
    use coursehub_entity::{Course, CourseField};

    #[tokio::test]
    async fn test_editors_are_per_token() {
        let registry = EditorRegistry::new(Arc::new(MemoryCatalogStore::new()));
        let a = registry.editor_for("token-a");
        let again = registry.editor_for("token-a");
        let b = registry.editor_for("token-b");

        assert!(Arc::ptr_eq(&a, &again));
        assert!(!Arc::ptr_eq(&a, &b));
        a.open_new().await.unwrap();
        assert!(b.state().await.is_closed());

        assert!(registry.release("token-a"));
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn test_retain_active_drops_ended_sessions() {
        let registry = EditorRegistry::new(Arc::new(MemoryCatalogStore::new()));
        for token in ["live", "gone-1", "gone-2"] {
            registry.editor_for(token).open_new().await.unwrap();
        }

        assert_eq!(registry.retain_active(|token| token == "live"), 2);
        assert_eq!(registry.len(), 1);
        assert!(!registry.editor_for("live").state().await.is_closed());
    }

    #[tokio::test]
    async fn test_forget_course_closes_matching_sessions() {
        let store = Arc::new(MemoryCatalogStore::new());
        let course = Course::create()
            .with_id("c1")
            .set_field(CourseField::Title, "C1");
        store.upsert("c1", &course).await.unwrap();

        let registry = EditorRegistry::new(store);
        let id = CourseId::new("c1");
        registry.editor_for("a").open_existing(&id).await.unwrap();
        registry.editor_for("b").open_new().await.unwrap();

        assert_eq!(registry.forget_course(&id).await, 1);
        assert!(registry.editor_for("a").state().await.is_closed());
        assert!(!registry.editor_for("b").state().await.is_closed());
    }
}
