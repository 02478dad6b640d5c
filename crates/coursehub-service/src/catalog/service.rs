//! Catalog listing, search, lesson view, and whole-document writes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use coursehub_core::config::CatalogConfig;
use coursehub_core::error::AppError;
use coursehub_core::result::AppResult;
use coursehub_core::types::CourseId;
use coursehub_database::CatalogStore;
use coursehub_entity::course::LessonOutline;
use coursehub_entity::{Category, Course, CourseOutline, LessonPosition, Module};

/// A configured category label and the icon the UI shows for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    /// Display label.
    pub label: String,
    /// Icon name for built-in categories; `None` for custom labels.
    pub icon: Option<String>,
}

/// One lesson with its neighbours, as the lesson player shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonView {
    /// Owning course.
    pub course_id: CourseId,
    /// 1-based unit number.
    pub unit_number: usize,
    /// 1-based lesson number within the unit.
    pub lesson_number: usize,
    /// Subject title.
    pub unit_title: String,
    /// The lesson itself.
    pub module: Module,
    /// Numbered summary with availability flags.
    pub outline: LessonOutline,
    /// Position of the current lesson.
    pub position: LessonPosition,
    /// Next lesson; `None` means the course is finished.
    pub next: Option<LessonPosition>,
    /// Previous lesson; `None` at the first lesson.
    pub previous: Option<LessonPosition>,
}

/// Catalog operations over the store.
#[derive(Debug, Clone)]
pub struct CatalogService {
    /// Catalog store.
    store: Arc<CatalogStore>,
    /// Catalog configuration.
    config: CatalogConfig,
}

impl CatalogService {
    /// Creates a catalog service.
    pub fn new(store: Arc<CatalogStore>, config: CatalogConfig) -> Self {
        Self { store, config }
    }

    /// All courses, in store order.
    pub async fn list(&self) -> AppResult<Vec<Course>> {
        self.store.list_all().await
    }

    /// Courses whose title or category contains `query`, ignoring case.
    /// A blank query returns every course.
    pub async fn search(&self, query: &str) -> AppResult<Vec<Course>> {
        let needle = query.trim().to_lowercase();
        let courses = self.store.list_all().await?;
        if needle.is_empty() {
            return Ok(courses);
        }
        Ok(courses
            .into_iter()
            .filter(|c| {
                c.title.to_lowercase().contains(&needle)
                    || c.category.to_lowercase().contains(&needle)
            })
            .collect())
    }

    /// A single course.
    pub async fn get(&self, id: &CourseId) -> AppResult<Course> {
        self.store
            .find_by_id(id.as_str())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Course '{id}' not found")))
    }

    /// Numbered outline of a course.
    pub async fn outline(&self, id: &CourseId) -> AppResult<CourseOutline> {
        Ok(CourseOutline::of(&self.get(id).await?))
    }

    /// One lesson plus navigation to its neighbours.
    pub async fn lesson(&self, id: &CourseId, position: LessonPosition) -> AppResult<LessonView> {
        let course = self.get(id).await?;
        Self::lesson_in(&course, position)
    }

    /// The first lesson of a course; `NotFound` when it has none.
    pub async fn first_lesson(&self, id: &CourseId) -> AppResult<LessonView> {
        let course = self.get(id).await?;
        let position = LessonPosition::first(&course)
            .ok_or_else(|| AppError::not_found(format!("Course '{id}' has no lessons yet")))?;
        Self::lesson_in(&course, position)
    }

    fn lesson_in(course: &Course, position: LessonPosition) -> AppResult<LessonView> {
        if !position.exists_in(course) {
            return Err(AppError::not_found(format!(
                "Course '{}' has no lesson at unit {}, lesson {}",
                course.id,
                position.subject_index + 1,
                position.module_index + 1
            )));
        }
        let outline = CourseOutline::of(course);
        let unit = &outline.units[position.subject_index];
        let subject = &course.subjects[position.subject_index];

        Ok(LessonView {
            course_id: course.id.clone(),
            unit_number: unit.unit_number,
            lesson_number: position.module_index + 1,
            unit_title: subject.title.clone(),
            module: subject.modules[position.module_index].clone(),
            outline: unit.lessons[position.module_index].clone(),
            position,
            next: position.next(course),
            previous: position.previous(course),
        })
    }

    /// Configured category labels with icons for the built-in ones.
    pub fn categories(&self) -> Vec<CategoryInfo> {
        self.config
            .categories
            .iter()
            .map(|label| CategoryInfo {
                label: label.clone(),
                icon: Category::from_label(label).map(|c| c.icon().to_string()),
            })
            .collect()
    }

    /// Store a new course. Blank subject/module ids are filled in.
    ///
    /// Fails with `Conflict` when the id is already taken.
    pub async fn create(&self, course: Course) -> AppResult<Course> {
        let course = course.with_missing_ids_filled();
        course.validate_for_save()?;

        if self.store.find_by_id(course.id.as_str()).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Course '{}' already exists",
                course.id
            )));
        }

        self.store.upsert(course.id.as_str(), &course).await?;
        info!(course_id = %course.id, subjects = course.subjects.len(), "Course created");
        Ok(course)
    }

    /// Replace the stored course `id` with `course`.
    ///
    /// The id in the body may be omitted; if present it must match `id`.
    pub async fn replace(&self, id: &CourseId, course: Course) -> AppResult<Course> {
        if !course.id.is_blank() && &course.id != id {
            return Err(AppError::validation(format!(
                "course id '{}' does not match '{id}'",
                course.id
            )));
        }
        let course = course.with_id(id.clone()).with_missing_ids_filled();
        course.validate_for_save()?;

        if self.store.find_by_id(id.as_str()).await?.is_none() {
            return Err(AppError::not_found(format!("Course '{id}' not found")));
        }

        self.store.upsert(id.as_str(), &course).await?;
        info!(course_id = %id, "Course replaced");
        Ok(course)
    }

    /// Delete the course `id`.
    pub async fn delete(&self, id: &CourseId) -> AppResult<()> {
        if !self.store.delete_by_id(id.as_str()).await? {
            return Err(AppError::not_found(format!("Course '{id}' not found")));
        }
        info!(course_id = %id, "Course deleted");
        Ok(())
    }

    /// Whether the store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.store.health_check().await.unwrap_or(false)
    }
}
