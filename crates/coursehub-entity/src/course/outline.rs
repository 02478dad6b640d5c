//! Read-only lesson outline of a course and lesson-to-lesson navigation.

use serde::{Deserialize, Serialize};

use coursehub_core::types::{CourseId, ModuleId, SubjectId};

use super::model::Course;
use crate::module::resource;

/// Flattened, numbered view of a course as a learner sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseOutline {
    /// Course id.
    pub course_id: CourseId,
    /// Course title.
    pub title: String,
    /// Whether a class routine link is attached.
    pub has_routine: bool,
    /// Units in display order.
    pub units: Vec<UnitOutline>,
    /// Total lessons across every unit.
    pub lesson_count: usize,
}

/// One subject, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitOutline {
    /// 1-based unit number; equals array position + 1.
    pub unit_number: usize,
    /// Subject id.
    pub subject_id: SubjectId,
    /// Subject title.
    pub title: String,
    /// Lessons in display order.
    pub lessons: Vec<LessonOutline>,
}

/// One module, numbered from 1 within its unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonOutline {
    /// 1-based lesson number within the unit.
    pub lesson_number: usize,
    /// Module id.
    pub module_id: ModuleId,
    /// Lesson title.
    pub title: String,
    /// Video link, `None` when absent.
    pub video_ref: Option<String>,
    /// Lecture notes link, `None` when absent.
    pub pdf_ref: Option<String>,
    /// Practice sheet link, `None` when absent.
    pub practice_ref: Option<String>,
    /// Whether a video is attached.
    pub has_video: bool,
    /// Whether lecture notes are attached.
    pub has_pdf: bool,
    /// Whether a practice sheet is attached.
    pub has_practice_sheet: bool,
}

impl CourseOutline {
    /// Build the outline from the course's current subject and module order.
    pub fn of(course: &Course) -> Self {
        let units = course
            .subjects
            .iter()
            .enumerate()
            .map(|(i, subject)| UnitOutline {
                unit_number: i + 1,
                subject_id: subject.id.clone(),
                title: subject.title.clone(),
                lessons: subject
                    .modules
                    .iter()
                    .enumerate()
                    .map(|(j, module)| LessonOutline {
                        lesson_number: j + 1,
                        module_id: module.id.clone(),
                        title: module.content_title.clone(),
                        video_ref: resource::available(&module.video_ref).map(str::to_string),
                        pdf_ref: resource::available(&module.pdf_ref).map(str::to_string),
                        practice_ref: resource::available(&module.practice_ref)
                            .map(str::to_string),
                        has_video: module.has_video(),
                        has_pdf: module.has_pdf(),
                        has_practice_sheet: module.has_practice_sheet(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            course_id: course.id.clone(),
            title: course.title.clone(),
            has_routine: course.has_routine(),
            units,
            lesson_count: course.lesson_count(),
        }
    }
}

/// Position of a lesson: `(subject_index, module_index)`, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPosition {
    /// Index into `Course::subjects`.
    pub subject_index: usize,
    /// Index into `Subject::modules`.
    pub module_index: usize,
}

impl LessonPosition {
    /// Construct a position.
    pub fn new(subject_index: usize, module_index: usize) -> Self {
        Self {
            subject_index,
            module_index,
        }
    }

    /// The first lesson of the course, skipping subjects without modules.
    pub fn first(course: &Course) -> Option<Self> {
        course
            .subjects
            .iter()
            .position(|s| !s.modules.is_empty())
            .map(|i| Self::new(i, 0))
    }

    /// Whether this position names an existing lesson of `course`.
    pub fn exists_in(&self, course: &Course) -> bool {
        course
            .subjects
            .get(self.subject_index)
            .is_some_and(|s| self.module_index < s.modules.len())
    }

    /// The lesson after this one, crossing into the next non-empty subject.
    ///
    /// `None` after the last lesson: the learner has finished the course.
    pub fn next(&self, course: &Course) -> Option<Self> {
        let subject = course.subjects.get(self.subject_index)?;
        if self.module_index + 1 < subject.modules.len() {
            return Some(Self::new(self.subject_index, self.module_index + 1));
        }
        course
            .subjects
            .iter()
            .enumerate()
            .skip(self.subject_index + 1)
            .find(|(_, s)| !s.modules.is_empty())
            .map(|(i, _)| Self::new(i, 0))
    }

    /// The lesson before this one, crossing back into the previous
    /// non-empty subject. `None` at the first lesson.
    pub fn previous(&self, course: &Course) -> Option<Self> {
        if !self.exists_in(course) {
            return None;
        }
        if self.module_index > 0 {
            return Some(Self::new(self.subject_index, self.module_index - 1));
        }
        course.subjects[..self.subject_index]
            .iter()
            .enumerate()
            .rev()
            .find(|(_, s)| !s.modules.is_empty())
            .map(|(i, s)| Self::new(i, s.modules.len() - 1))
    }
}
