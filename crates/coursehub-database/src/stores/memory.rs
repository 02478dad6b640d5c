//! In-process catalog store. Contents are lost when the process exits.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use coursehub_core::result::AppResult;
use coursehub_core::traits::DocumentStore;
use coursehub_entity::Course;

/// Catalog store holding courses in a concurrent map.
///
/// `list_all` returns courses in first-insertion order; replacing a course
/// keeps its original position.
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    courses: DashMap<String, (u64, Course)>,
    next_seq: AtomicU64,
}

impl MemoryCatalogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `courses`, keyed by their ids.
    pub fn with_courses(courses: impl IntoIterator<Item = Course>) -> Self {
        let store = Self::new();
        for course in courses {
            store.put(course.id.as_str(), course.clone());
        }
        store
    }

    /// Number of stored courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    fn put(&self, id: &str, course: Course) {
        match self.courses.entry(id.to_string()) {
            Entry::Occupied(mut entry) => entry.get_mut().1 = course,
            Entry::Vacant(entry) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                entry.insert((seq, course));
            }
        }
    }
}

#[async_trait]
impl DocumentStore<Course> for MemoryCatalogStore {
    async fn list_all(&self) -> AppResult<Vec<Course>> {
        let mut entries: Vec<(u64, Course)> = self
            .courses
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);
        Ok(entries.into_iter().map(|(_, course)| course).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        Ok(self.courses.get(id).map(|entry| entry.1.clone()))
    }

    async fn upsert(&self, id: &str, doc: &Course) -> AppResult<()> {
        self.put(id, doc.clone());
        debug!(course_id = %id, "Course stored in memory");
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        Ok(self.courses.remove(id).is_some())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
