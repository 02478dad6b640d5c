//! Demo catalog content written when the catalog starts out empty.

use tracing::info;

use coursehub_core::result::AppResult;
use coursehub_core::types::{ModuleId, SubjectId};
use coursehub_entity::{Course, CourseField, Module, ModuleField, Placement, Subject, SubjectField};

use crate::stores::CatalogStore;

/// Id of the demo course.
pub const DEMO_COURSE_ID: &str = "react-basics";

/// The demo course: one subject holding one lesson.
pub fn demo_course() -> AppResult<Course> {
    let module = Module {
        id: ModuleId::new("m1"),
        ..Module::default()
    }
    .set_field(ModuleField::ContentTitle, "Introduction to React")
    .set_field(ModuleField::ContentDescription, "Overview of React.")
    .set_field(
        ModuleField::VideoRef,
        "https://www.youtube.com/watch?v=Ke90Tje7VS0",
    )
    .set_field(ModuleField::PdfRef, "#")
    .set_field(ModuleField::PracticeRef, "#");

    let subject = Subject {
        id: SubjectId::new("s1"),
        ..Subject::default()
    }
    .set_field(SubjectField::Title, "Getting Started")
    .set_field(
        SubjectField::Description,
        "Components, props and state from first principles.",
    )
    .insert_module(module, Placement::End)?;

    Course::create()
        .with_id(DEMO_COURSE_ID)
        .set_field(CourseField::Title, "React Fundamentals")
        .set_field(
            CourseField::Description,
            "Learn the core concepts of React including hooks, components, and state management.",
        )
        .set_field(CourseField::Instructor, "John Doe")
        .set_field(CourseField::Category, "Skill Development")
        .set_field(CourseField::RoutineRef, "https://example.com/react-routine")
        .insert_subject(subject, Placement::End)
}

/// Upsert the demo course if the store holds no courses.
///
/// Returns `true` when the demo course was written.
pub async fn seed_if_empty(store: &CatalogStore) -> AppResult<bool> {
    if !store.list_all().await?.is_empty() {
        return Ok(false);
    }

    let course = demo_course()?;
    store.upsert(course.id.as_str(), &course).await?;
    info!(course_id = %course.id, "Seeded demo course into empty catalog");
    Ok(true)
}
