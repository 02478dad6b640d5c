//! Edit session data and the externally visible edit state.

use serde::{Deserialize, Serialize};

use coursehub_core::types::CourseId;
use coursehub_entity::Course;

/// Which part of the course is being edited in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "snake_case")]
pub enum DrillPath {
    /// The course root: metadata and the subject list.
    #[default]
    Root,
    /// One subject and its module list.
    Subject {
        /// Index into `Course::subjects`.
        subject_index: usize,
    },
    /// One module of one subject.
    Module {
        /// Index into `Course::subjects`.
        subject_index: usize,
        /// Index into `Subject::modules`.
        module_index: usize,
    },
}

impl DrillPath {
    /// The drilled subject index, if any.
    pub fn subject_index(&self) -> Option<usize> {
        match *self {
            Self::Root => None,
            Self::Subject { subject_index } | Self::Module { subject_index, .. } => {
                Some(subject_index)
            }
        }
    }

    /// The drilled module index, if any.
    pub fn module_index(&self) -> Option<usize> {
        match *self {
            Self::Module { module_index, .. } => Some(module_index),
            _ => None,
        }
    }

    /// The same path with the subject component replaced by `subject_index`.
    pub(crate) fn with_subject_index(self, subject_index: usize) -> Self {
        match self {
            Self::Root => Self::Root,
            Self::Subject { .. } => Self::Subject { subject_index },
            Self::Module { module_index, .. } => Self::Module {
                subject_index,
                module_index,
            },
        }
    }

    /// Whether every component refers to an existing element of `course`.
    pub fn is_valid_for(&self, course: &Course) -> bool {
        match *self {
            Self::Root => true,
            Self::Subject { subject_index } => subject_index < course.subjects.len(),
            Self::Module {
                subject_index,
                module_index,
            } => course
                .subjects
                .get(subject_index)
                .is_some_and(|s| module_index < s.modules.len()),
        }
    }
}

/// The course being edited plus navigation and save bookkeeping.
///
/// Lives only while an admin has a course open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// The in-progress course value; replaced on every mutation.
    pub base_course: Course,
    /// `true` for a course created in this session and never saved.
    pub is_new: bool,
    /// Current navigation position.
    pub drill_path: DrillPath,
    /// Incremented on every successful mutation.
    pub revision: u64,
    pub(crate) generation: u64,
    pub(crate) save_in_flight: bool,
}

impl EditSession {
    pub(crate) fn new(base_course: Course, is_new: bool, generation: u64) -> Self {
        Self {
            base_course,
            is_new,
            drill_path: DrillPath::Root,
            revision: 0,
            generation,
            save_in_flight: false,
        }
    }

    /// Install an edited course and the drill path that matches it.
    pub(crate) fn commit(&mut self, course: Course, drill_path: DrillPath) {
        debug_assert!(drill_path.is_valid_for(&course));
        self.base_course = course;
        self.drill_path = drill_path;
        self.revision += 1;
    }

    /// Install an edited course whose shape leaves the drill path valid.
    pub(crate) fn replace_course(&mut self, course: Course) {
        let drill_path = self.drill_path;
        self.commit(course, drill_path);
    }

    /// Whether a save started from this session has not completed yet.
    pub fn is_saving(&self) -> bool {
        self.save_in_flight
    }

    /// The externally visible state for this session.
    pub fn view(&self) -> EditState {
        let course = self.base_course.clone();
        match self.drill_path {
            DrillPath::Root => EditState::EditingCourseRoot { course },
            DrillPath::Subject { subject_index } => EditState::EditingSubject {
                course,
                subject_index,
            },
            DrillPath::Module {
                subject_index,
                module_index,
            } => EditState::EditingModule {
                course,
                subject_index,
                module_index,
            },
        }
    }
}

/// What the admin panel renders: nothing open, or the course at one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EditState {
    /// No course is open.
    Closed,
    /// Editing course metadata and the subject list.
    EditingCourseRoot {
        /// Current course value.
        course: Course,
    },
    /// Editing one subject and its modules.
    EditingSubject {
        /// Current course value.
        course: Course,
        /// Drilled subject.
        subject_index: usize,
    },
    /// Editing one module.
    EditingModule {
        /// Current course value.
        course: Course,
        /// Subject holding the module.
        subject_index: usize,
        /// Drilled module.
        module_index: usize,
    },
}

impl EditState {
    /// The course being edited, unless closed.
    pub fn course(&self) -> Option<&Course> {
        match self {
            Self::Closed => None,
            Self::EditingCourseRoot { course }
            | Self::EditingSubject { course, .. }
            | Self::EditingModule { course, .. } => Some(course),
        }
    }

    /// Whether no course is open.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

/// Snapshot handed out when a save starts.
///
/// The caller writes `course` to the store and reports the result back
/// through [`TreeEditor::finish_save`](super::TreeEditor::finish_save).
#[derive(Debug, Clone)]
pub struct SaveTicket {
    /// Store key to upsert under.
    pub course_id: CourseId,
    /// Full course value to upsert.
    pub course: Course,
    pub(crate) generation: u64,
    pub(crate) revision: u64,
}

/// How a completed save affected the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveOutcome {
    /// Saved and the session was closed.
    Closed,
    /// Saved, but edits were made while the save was in flight; the
    /// session stays open with those edits and is no longer new.
    StillOpen,
    /// The session was discarded or replaced before the save finished;
    /// the result was ignored.
    Detached,
}

/// A completed delete and the catalog as re-listed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDeletion {
    /// The deleted course.
    pub id: CourseId,
    /// Courses left in the store; `None` when the re-list failed.
    pub remaining: Option<Vec<Course>>,
}

/// Edit state plus the session flags the admin panel shows beside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorStatus {
    /// Closed, or the course at its drill level.
    pub edit: EditState,
    /// Whether the open course has never been saved.
    pub is_new: bool,
    /// Whether a save is pending.
    pub is_saving: bool,
}
