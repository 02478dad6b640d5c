//! Course entity model and its subject-level edit operations.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use coursehub_core::error::AppError;
use coursehub_core::result::AppResult;
use coursehub_core::types::{CourseId, ModuleId, SubjectId};

use super::category::Category;
use crate::module::resource;
use crate::sequence::{self, Placement};
use crate::subject::Subject;

/// A top-level catalog entry: metadata plus ordered subjects.
///
/// `subjects[n]` is unit `n + 1`. `id` is chosen by the admin when the
/// course is created and is the catalog store key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Course {
    /// Store key; set once at creation.
    pub id: CourseId,
    /// Course title.
    pub title: String,
    /// Course description.
    pub description: String,
    /// Instructor name.
    pub instructor: String,
    /// Category label; see [`Category`] for the recognised set.
    pub category: String,
    /// Link to the class routine; empty when none.
    pub routine_ref: String,
    /// Units in display order.
    pub subjects: Vec<Subject>,
}

impl Course {
    /// An empty course with no id and no subjects, as seeded by "add new course".
    pub fn create() -> Self {
        Self::default()
    }

    /// Return a copy carrying `id`.
    pub fn with_id(&self, id: impl Into<CourseId>) -> Self {
        Self {
            id: id.into(),
            ..self.clone()
        }
    }

    /// Create an empty subject suitable for insertion into this course.
    pub fn new_subject(&self) -> Subject {
        Subject::create_among(&self.subjects)
    }

    /// Position of the subject with `id`, if present.
    pub fn subject_index(&self, id: &SubjectId) -> Option<usize> {
        self.subjects.iter().position(|s| &s.id == id)
    }

    /// Return a copy with `subject` inserted at `placement`.
    ///
    /// Fails with `Validation` for a blank id and `Conflict` when a sibling
    /// already carries the same id.
    pub fn insert_subject(&self, subject: Subject, placement: Placement) -> AppResult<Self> {
        if subject.id.is_blank() {
            return Err(AppError::validation("subject id is required"));
        }
        if self.subject_index(&subject.id).is_some() {
            return Err(AppError::conflict(format!(
                "course '{}' already has a subject with id '{}'",
                self.id, subject.id
            )));
        }
        Ok(Self {
            subjects: sequence::inserted(&self.subjects, subject, placement),
            ..self.clone()
        })
    }

    /// Return a copy without the subject carrying `id`.
    ///
    /// Removing an id that is not present returns an equal course.
    pub fn remove_subject(&self, id: &SubjectId) -> Self {
        match sequence::without(&self.subjects, |s| &s.id == id) {
            Some(subjects) => Self {
                subjects,
                ..self.clone()
            },
            None => self.clone(),
        }
    }

    /// Return a copy with the subject at `from` relocated to `to`.
    pub fn move_subject(&self, from: usize, to: usize) -> AppResult<Self> {
        Ok(Self {
            subjects: sequence::relocated(&self.subjects, from, to, "subject")?,
            ..self.clone()
        })
    }

    /// Return a copy with the subject at `index` replaced by `edit(subject)`.
    ///
    /// The subject keeps its id whatever `edit` returns.
    pub fn update_subject(
        &self,
        index: usize,
        edit: impl FnOnce(&Subject) -> AppResult<Subject>,
    ) -> AppResult<Self> {
        let current = self.subjects.get(index).ok_or_else(|| {
            AppError::not_found(format!(
                "no subject at position {index} in course '{}'",
                self.id
            ))
        })?;

        let mut edited = edit(current)?;
        edited.id = current.id.clone();

        let mut subjects = self.subjects.clone();
        subjects[index] = edited;
        Ok(Self {
            subjects,
            ..self.clone()
        })
    }

    /// Return a copy with `field` set to `value`.
    pub fn set_field(&self, field: CourseField, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut next = self.clone();
        match field {
            CourseField::Title => next.title = value,
            CourseField::Description => next.description = value,
            CourseField::Instructor => next.instructor = value,
            CourseField::Category => next.category = value,
            CourseField::RoutineRef => next.routine_ref = value,
        }
        next
    }

    /// Read the current value of `field`.
    pub fn field(&self, field: CourseField) -> &str {
        match field {
            CourseField::Title => &self.title,
            CourseField::Description => &self.description,
            CourseField::Instructor => &self.instructor,
            CourseField::Category => &self.category,
            CourseField::RoutineRef => &self.routine_ref,
        }
    }

    /// The recognised category, if the label is one of the built-in ones.
    pub fn known_category(&self) -> Option<Category> {
        Category::from_label(&self.category)
    }

    /// Whether a class routine link is attached.
    pub fn has_routine(&self) -> bool {
        resource::is_available(&self.routine_ref)
    }

    /// Total number of lessons across all subjects.
    pub fn lesson_count(&self) -> usize {
        self.subjects.iter().map(|s| s.modules.len()).sum()
    }

    /// Check the fields required before the course may be stored.
    ///
    /// The error message names the first missing field.
    pub fn validate_for_save(&self) -> AppResult<()> {
        if self.id.is_blank() {
            return Err(AppError::validation("course id is required"));
        }
        if self.title.trim().is_empty() {
            return Err(AppError::validation("course title is required"));
        }
        self.check_identity()
    }

    /// Check that subject ids are unique within the course and module ids
    /// are unique within each subject.
    pub fn check_identity(&self) -> AppResult<()> {
        let mut seen = HashSet::new();
        for subject in &self.subjects {
            if subject.id.is_blank() {
                return Err(AppError::validation("subject id is required"));
            }
            if !seen.insert(&subject.id) {
                return Err(AppError::validation(format!(
                    "duplicate subject id '{}'",
                    subject.id
                )));
            }
            if !subject.has_unique_module_ids() {
                return Err(AppError::validation(format!(
                    "subject '{}' has blank or duplicate module ids",
                    subject.id
                )));
            }
        }
        Ok(())
    }

    /// Return a copy where every blank subject or module id is replaced by
    /// a fresh one. Existing ids are left alone.
    pub fn with_missing_ids_filled(&self) -> Self {
        let mut next = self.clone();
        for index in 0..next.subjects.len() {
            if next.subjects[index].id.is_blank() {
                let id = SubjectId::generate_unique(|c| next.subjects.iter().any(|s| &s.id == c));
                next.subjects[index].id = id;
            }
            let subject = &mut next.subjects[index];
            for m in 0..subject.modules.len() {
                if subject.modules[m].id.is_blank() {
                    let id =
                        ModuleId::generate_unique(|c| subject.modules.iter().any(|x| &x.id == c));
                    subject.modules[m].id = id;
                }
            }
        }
        next
    }
}

/// Editable text fields of a [`Course`]. The id is deliberately absent:
/// it is assigned once through [`Course::with_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CourseField {
    /// `title`
    Title,
    /// `description`
    Description,
    /// `instructor`
    Instructor,
    /// `category`
    Category,
    /// `routineRef`
    RoutineRef,
}

impl CourseField {
    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Instructor => "instructor",
            Self::Category => "category",
            Self::RoutineRef => "routineRef",
        }
    }
}

impl fmt::Display for CourseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "instructor" => Ok(Self::Instructor),
            "category" => Ok(Self::Category),
            "routineRef" | "routine_ref" | "routineUrl" => Ok(Self::RoutineRef),
            "id" => Err(AppError::validation(
                "course id is not an editable field; it is set when the course is created",
            )),
            _ => Err(AppError::validation(format!("Unknown course field: '{s}'"))),
        }
    }
}
