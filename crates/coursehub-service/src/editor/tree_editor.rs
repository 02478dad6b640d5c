//! Synchronous tree editor: one edit session, drill-in navigation, and
//! invariant-preserving mutations over the course being edited.

use tracing::{debug, info, warn};

use coursehub_core::error::AppError;
use coursehub_core::result::AppResult;
use coursehub_core::types::{CourseId, ModuleId, SubjectId};
use coursehub_entity::{Course, CourseField, ModuleField, Placement, SubjectField};

use super::state::{DrillPath, EditSession, EditState, EditorStatus, SaveOutcome, SaveTicket};

/// Holds at most one [`EditSession`].
///
/// Every mutation builds a new `Course` value from the current one and
/// replaces it only on success, so a rejected operation leaves the
/// session exactly as it was. Nothing here talks to the catalog store;
/// saving is split into [`begin_save`](Self::begin_save) and
/// [`finish_save`](Self::finish_save) around the caller's store write.
#[derive(Debug, Default)]
pub struct TreeEditor {
    session: Option<EditSession>,
    generation: u64,
}

fn rejected(operation: &'static str, err: AppError) -> AppError {
    warn!(operation, kind = %err.kind, error = %err.message, "Tree edit rejected");
    err
}

fn not_open() -> AppError {
    AppError::conflict("no course is open for editing")
}

impl TreeEditor {
    /// Create an editor with no open session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state as seen by the admin panel.
    pub fn state(&self) -> EditState {
        self.session
            .as_ref()
            .map_or(EditState::Closed, EditSession::view)
    }

    /// Current state with the session flags.
    pub fn status(&self) -> EditorStatus {
        EditorStatus {
            edit: self.state(),
            is_new: self.session.as_ref().is_some_and(|s| s.is_new),
            is_saving: self.session.as_ref().is_some_and(EditSession::is_saving),
        }
    }

    /// The open session, if any.
    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Whether a course is open.
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    // ── Opening and closing ──────────────────────────────────────────

    /// Start editing a brand-new empty course ("add new course").
    pub fn open_new(&mut self) -> AppResult<EditState> {
        self.open(Course::create(), true)
    }

    /// Start editing a course fetched from the catalog store.
    pub fn open_existing(&mut self, course: Course) -> AppResult<EditState> {
        self.open(course, false)
    }

    fn open(&mut self, course: Course, is_new: bool) -> AppResult<EditState> {
        if let Some(current) = &self.session {
            return Err(rejected(
                "open",
                AppError::conflict(format!(
                    "course '{}' is already open; save or discard it first",
                    current.base_course.id
                )),
            ));
        }
        self.generation += 1;
        info!(course_id = %course.id, is_new, "Edit session opened");
        let session = EditSession::new(course, is_new, self.generation);
        let state = session.view();
        self.session = Some(session);
        Ok(state)
    }

    /// Drop the session without touching the store.
    ///
    /// A save still in flight is detached: its result will be ignored.
    /// Returns `false` if nothing was open.
    pub fn discard(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                info!(
                    course_id = %session.base_course.id,
                    saving = session.save_in_flight,
                    "Edit session discarded"
                );
                true
            }
            None => false,
        }
    }

    /// Close the session if it edits the stored course `id`.
    ///
    /// Called after the course was deleted from the store. Returns whether
    /// a session was closed.
    pub fn forget_course(&mut self, id: &CourseId) -> bool {
        let editing = self
            .session
            .as_ref()
            .is_some_and(|s| !s.is_new && &s.base_course.id == id);
        if editing {
            self.session = None;
            info!(course_id = %id, "Edit session closed after course deletion");
        }
        editing
    }

    fn session_mut(&mut self) -> AppResult<&mut EditSession> {
        self.session.as_mut().ok_or_else(not_open)
    }

    // ── Navigation ───────────────────────────────────────────────────

    /// Drill into subject `subject_index` from the course root.
    pub fn open_subject(&mut self, subject_index: usize) -> AppResult<EditState> {
        let session = self.session_mut()?;
        if session.drill_path != DrillPath::Root {
            return Err(rejected(
                "open_subject",
                AppError::conflict("go back to the subject list before opening another subject"),
            ));
        }
        if subject_index >= session.base_course.subjects.len() {
            return Err(rejected(
                "open_subject",
                AppError::not_found(format!("no subject at position {subject_index}")),
            ));
        }
        session.drill_path = DrillPath::Subject { subject_index };
        Ok(session.view())
    }

    /// Drill into module `module_index` of the open subject.
    pub fn open_module(&mut self, module_index: usize) -> AppResult<EditState> {
        let session = self.session_mut()?;
        let DrillPath::Subject { subject_index } = session.drill_path else {
            return Err(rejected(
                "open_module",
                AppError::conflict("open a subject's module list before opening a module"),
            ));
        };
        let count = session.base_course.subjects[subject_index].modules.len();
        if module_index >= count {
            return Err(rejected(
                "open_module",
                AppError::not_found(format!("no module at position {module_index}")),
            ));
        }
        session.drill_path = DrillPath::Module {
            subject_index,
            module_index,
        };
        Ok(session.view())
    }

    /// Back out one level: module to subject, subject to course root.
    pub fn back(&mut self) -> AppResult<EditState> {
        let session = self.session_mut()?;
        session.drill_path = match session.drill_path {
            DrillPath::Module { subject_index, .. } => DrillPath::Subject { subject_index },
            DrillPath::Subject { .. } => DrillPath::Root,
            DrillPath::Root => {
                return Err(rejected(
                    "back",
                    AppError::conflict("already at the course root"),
                ));
            }
        };
        Ok(session.view())
    }

    // ── Course level ─────────────────────────────────────────────────

    /// Set the id of a course that has never been saved.
    pub fn set_course_id(&mut self, id: impl Into<CourseId>) -> AppResult<()> {
        let session = self.session_mut()?;
        if !session.is_new {
            return Err(rejected(
                "set_course_id",
                AppError::conflict("the id of an existing course cannot be changed"),
            ));
        }
        if session.save_in_flight {
            return Err(rejected(
                "set_course_id",
                AppError::conflict("the course id cannot change while a save is in progress"),
            ));
        }
        let course = session.base_course.with_id(id);
        debug!(course_id = %course.id, "Course id set");
        session.replace_course(course);
        Ok(())
    }

    /// Set one course metadata field.
    pub fn set_course_field(&mut self, field: CourseField, value: impl Into<String>) -> AppResult<()> {
        let session = self.session_mut()?;
        let course = session.base_course.set_field(field, value);
        debug!(course_id = %course.id, %field, "Course field set");
        session.replace_course(course);
        Ok(())
    }

    /// Append or insert a new empty subject. Does not change the drill path
    /// except to keep it pointing at the same subject.
    pub fn add_subject(&mut self, placement: Placement) -> AppResult<SubjectId> {
        let session = self.session_mut()?;
        let subject = session.base_course.new_subject();
        let id = subject.id.clone();
        let at = placement.resolve(session.base_course.subjects.len());
        let course = session
            .base_course
            .insert_subject(subject, placement)
            .map_err(|e| rejected("add_subject", e))?;

        let drill = match session.drill_path.subject_index() {
            Some(i) if i >= at => session.drill_path.with_subject_index(i + 1),
            _ => session.drill_path,
        };
        debug!(subject_id = %id, position = at, "Subject added");
        session.commit(course, drill);
        Ok(id)
    }

    /// Remove the subject carrying `id`. Absent ids are a no-op returning
    /// `false`. Removing the drilled subject returns to the course root.
    pub fn remove_subject(&mut self, id: &SubjectId) -> AppResult<bool> {
        let session = self.session_mut()?;
        let Some(removed) = session.base_course.subject_index(id) else {
            debug!(subject_id = %id, "Subject not present; nothing removed");
            return Ok(false);
        };
        let course = session.base_course.remove_subject(id);
        let drill = match session.drill_path.subject_index() {
            Some(i) if i == removed => DrillPath::Root,
            Some(i) if i > removed => session.drill_path.with_subject_index(i - 1),
            _ => session.drill_path,
        };
        debug!(subject_id = %id, position = removed, "Subject removed");
        session.commit(course, drill);
        Ok(true)
    }

    /// Relocate a subject; the drill path follows the drilled subject.
    pub fn move_subject(&mut self, from: usize, to: usize) -> AppResult<()> {
        let session = self.session_mut()?;
        let course = session
            .base_course
            .move_subject(from, to)
            .map_err(|e| rejected("move_subject", e))?;

        let drill = match session.drill_path.subject_index() {
            Some(i) => {
                let followed = &session.base_course.subjects[i].id;
                let now = course.subject_index(followed).unwrap_or(i);
                session.drill_path.with_subject_index(now)
            }
            None => session.drill_path,
        };
        debug!(from, to, "Subject moved");
        session.commit(course, drill);
        Ok(())
    }

    // ── Subject level ────────────────────────────────────────────────

    fn drilled_subject(session: &EditSession, operation: &'static str) -> AppResult<usize> {
        session.drill_path.subject_index().ok_or_else(|| {
            rejected(
                operation,
                AppError::conflict("open a subject before editing it"),
            )
        })
    }

    /// Set one field of the open subject.
    pub fn set_subject_field(
        &mut self,
        field: SubjectField,
        value: impl Into<String>,
    ) -> AppResult<()> {
        let session = self.session_mut()?;
        let si = Self::drilled_subject(session, "set_subject_field")?;
        let course = session
            .base_course
            .update_subject(si, |s| Ok(s.set_field(field, value)))?;
        debug!(subject_index = si, %field, "Subject field set");
        session.replace_course(course);
        Ok(())
    }

    /// Add a new empty module to the open subject.
    pub fn add_module(&mut self, placement: Placement) -> AppResult<ModuleId> {
        let session = self.session_mut()?;
        let si = Self::drilled_subject(session, "add_module")?;
        let subject = &session.base_course.subjects[si];
        let module = subject.new_module();
        let id = module.id.clone();
        let at = placement.resolve(subject.modules.len());
        let course = session
            .base_course
            .update_subject(si, |s| s.insert_module(module, placement))
            .map_err(|e| rejected("add_module", e))?;

        let drill = match session.drill_path {
            DrillPath::Module {
                subject_index,
                module_index,
            } if module_index >= at => DrillPath::Module {
                subject_index,
                module_index: module_index + 1,
            },
            other => other,
        };
        debug!(subject_index = si, module_id = %id, position = at, "Module added");
        session.commit(course, drill);
        Ok(id)
    }

    /// Remove a module of the open subject. Absent ids are a no-op
    /// returning `false`. Removing the drilled module returns to the subject.
    pub fn remove_module(&mut self, id: &ModuleId) -> AppResult<bool> {
        let session = self.session_mut()?;
        let si = Self::drilled_subject(session, "remove_module")?;
        let Some(removed) = session.base_course.subjects[si].module_index(id) else {
            debug!(subject_index = si, module_id = %id, "Module not present; nothing removed");
            return Ok(false);
        };
        let course = session
            .base_course
            .update_subject(si, |s| Ok(s.remove_module(id)))?;

        let drill = match session.drill_path {
            DrillPath::Module { module_index, .. } if module_index == removed => {
                DrillPath::Subject { subject_index: si }
            }
            DrillPath::Module { module_index, .. } if module_index > removed => {
                DrillPath::Module {
                    subject_index: si,
                    module_index: module_index - 1,
                }
            }
            other => other,
        };
        debug!(subject_index = si, module_id = %id, position = removed, "Module removed");
        session.commit(course, drill);
        Ok(true)
    }

    /// Relocate a module within the open subject; the drill path follows
    /// the drilled module.
    pub fn move_module(&mut self, from: usize, to: usize) -> AppResult<()> {
        let session = self.session_mut()?;
        let si = Self::drilled_subject(session, "move_module")?;
        let course = session
            .base_course
            .update_subject(si, |s| s.move_module(from, to))
            .map_err(|e| rejected("move_module", e))?;

        let drill = match session.drill_path {
            DrillPath::Module { module_index, .. } => {
                let followed = &session.base_course.subjects[si].modules[module_index].id;
                DrillPath::Module {
                    subject_index: si,
                    module_index: course.subjects[si]
                        .module_index(followed)
                        .unwrap_or(module_index),
                }
            }
            other => other,
        };
        debug!(subject_index = si, from, to, "Module moved");
        session.commit(course, drill);
        Ok(())
    }

    // ── Module level ─────────────────────────────────────────────────

    /// Set one field of the open module.
    pub fn set_module_field(&mut self, field: ModuleField, value: impl Into<String>) -> AppResult<()> {
        let session = self.session_mut()?;
        let DrillPath::Module {
            subject_index,
            module_index,
        } = session.drill_path
        else {
            return Err(rejected(
                "set_module_field",
                AppError::conflict("open a module before editing it"),
            ));
        };
        let course = session.base_course.update_subject(subject_index, |s| {
            s.update_module(module_index, |m| m.set_field(field, value))
        })?;
        debug!(subject_index, module_index, %field, "Module field set");
        session.replace_course(course);
        Ok(())
    }

    // ── Saving ───────────────────────────────────────────────────────

    /// Validate the course and mark a save as in flight.
    ///
    /// Fails with `Conflict` while another save is pending and with
    /// `Validation` naming the missing field; in both cases nothing changes.
    pub fn begin_save(&mut self) -> AppResult<SaveTicket> {
        let session = self.session_mut()?;
        if session.save_in_flight {
            return Err(rejected(
                "save",
                AppError::conflict("a save is already in progress for this course"),
            ));
        }
        session
            .base_course
            .validate_for_save()
            .map_err(|e| rejected("save", e))?;

        session.save_in_flight = true;
        Ok(SaveTicket {
            course_id: session.base_course.id.clone(),
            course: session.base_course.clone(),
            generation: session.generation,
            revision: session.revision,
        })
    }

    /// Record the store's answer to the write started by `ticket`.
    ///
    /// A failed write is returned as the error and leaves the session open
    /// with its edits. A successful write closes the session unless it was
    /// edited in the meantime.
    pub fn finish_save(
        &mut self,
        ticket: SaveTicket,
        result: AppResult<()>,
    ) -> AppResult<SaveOutcome> {
        let Some(session) = self
            .session
            .as_mut()
            .filter(|s| s.generation == ticket.generation)
        else {
            debug!(course_id = %ticket.course_id, "Save finished after the session was discarded");
            return Ok(SaveOutcome::Detached);
        };
        session.save_in_flight = false;

        if let Err(e) = result {
            warn!(course_id = %ticket.course_id, error = %e, "Save failed; session kept open");
            return Err(e);
        }

        if session.revision == ticket.revision {
            self.session = None;
            info!(course_id = %ticket.course_id, "Course saved; edit session closed");
            Ok(SaveOutcome::Closed)
        } else {
            session.is_new = false;
            info!(
                course_id = %ticket.course_id,
                "Course saved; newer edits keep the session open"
            );
            Ok(SaveOutcome::StillOpen)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursehub_core::error::ErrorKind;
    use coursehub_entity::CourseOutline;

    fn editor_with_course() -> TreeEditor {
        let mut editor = TreeEditor::new();
        editor.open_new().unwrap();
        editor.set_course_id("c1").unwrap();
        editor
            .set_course_field(CourseField::Title, "Physics")
            .unwrap();
        editor
    }

    fn course(editor: &TreeEditor) -> &Course {
        &editor.session().unwrap().base_course
    }

    fn drill(editor: &TreeEditor) -> DrillPath {
        editor.session().unwrap().drill_path
    }

    #[test]
    fn test_closed_editor_rejects_mutations() {
        let mut editor = TreeEditor::new();
        assert!(editor.state().is_closed());
        let err = editor.add_subject(Placement::End).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert!(editor.begin_save().is_err());
        assert!(!editor.discard());
    }

    #[test]
    fn test_open_twice_conflicts() {
        let mut editor = editor_with_course();
        let err = editor.open_existing(Course::create()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(course(&editor).id.as_str(), "c1");
    }

    #[test]
    fn test_navigation_follows_state_machine() {
        let mut editor = editor_with_course();
        editor.add_subject(Placement::End).unwrap();
        assert!(matches!(
            editor.open_module(0).unwrap_err().kind,
            ErrorKind::Conflict
        ));

        let state = editor.open_subject(0).unwrap();
        assert!(matches!(state, EditState::EditingSubject { subject_index: 0, .. }));
        editor.add_module(Placement::End).unwrap();
        let state = editor.open_module(0).unwrap();
        assert!(matches!(
            state,
            EditState::EditingModule {
                subject_index: 0,
                module_index: 0,
                ..
            }
        ));

        assert!(matches!(
            editor.back().unwrap(),
            EditState::EditingSubject { .. }
        ));
        assert!(matches!(
            editor.back().unwrap(),
            EditState::EditingCourseRoot { .. }
        ));
        assert!(editor.back().is_err());
        assert_eq!(editor.open_subject(5).unwrap_err().kind, ErrorKind::NotFound);
    }

    #[test]
    fn test_removing_drilled_subject_returns_to_root() {
        let mut editor = editor_with_course();
        let first = editor.add_subject(Placement::End).unwrap();
        editor.add_subject(Placement::End).unwrap();

        editor.open_subject(0).unwrap();
        editor.add_module(Placement::End).unwrap();
        editor.open_module(0).unwrap();

        assert!(editor.remove_subject(&first).unwrap());
        assert_eq!(drill(&editor), DrillPath::Root);
        assert!(matches!(editor.state(), EditState::EditingCourseRoot { .. }));

        editor.open_subject(0).unwrap();
        let only = course(&editor).subjects[0].id.clone();
        editor.remove_subject(&only).unwrap();
        assert_eq!(drill(&editor), DrillPath::Root);
    }

    #[test]
    fn test_removing_earlier_subject_shifts_drill() {
        let mut editor = editor_with_course();
        let first = editor.add_subject(Placement::End).unwrap();
        let second = editor.add_subject(Placement::End).unwrap();
        editor.open_subject(1).unwrap();

        editor.remove_subject(&first).unwrap();
        assert_eq!(drill(&editor), DrillPath::Subject { subject_index: 0 });
        assert_eq!(course(&editor).subjects[0].id, second);
    }

    #[test]
    fn test_remove_missing_subject_is_noop() {
        let mut editor = editor_with_course();
        editor.add_subject(Placement::End).unwrap();
        let before = editor.session().unwrap().clone();
        assert!(!editor.remove_subject(&SubjectId::new("missing")).unwrap());
        assert_eq!(editor.session().unwrap(), &before);
    }

    #[test]
    fn test_move_subject_keeps_drilled_identity() {
        let mut editor = editor_with_course();
        let a = editor.add_subject(Placement::End).unwrap();
        editor.add_subject(Placement::End).unwrap();
        editor.add_subject(Placement::End).unwrap();
        editor.open_subject(0).unwrap();

        editor.move_subject(0, 2).unwrap();
        assert_eq!(drill(&editor), DrillPath::Subject { subject_index: 2 });
        assert_eq!(course(&editor).subjects[2].id, a);
    }

    #[test]
    fn test_inserting_subject_before_drill_shifts_it() {
        let mut editor = editor_with_course();
        let target = editor.add_subject(Placement::End).unwrap();
        editor.open_subject(0).unwrap();
        let module = editor.add_module(Placement::End).unwrap();
        editor.open_module(0).unwrap();

        editor.add_subject(Placement::Start).unwrap();
        assert_eq!(
            drill(&editor),
            DrillPath::Module {
                subject_index: 1,
                module_index: 0
            }
        );
        assert_eq!(course(&editor).subjects[1].id, target);
        assert_eq!(course(&editor).subjects[1].modules[0].id, module);

        editor.add_subject(Placement::At(1)).unwrap();
        assert_eq!(drill(&editor).subject_index(), Some(2));
        assert_eq!(course(&editor).subjects[2].id, target);

        editor.add_subject(Placement::End).unwrap();
        assert_eq!(drill(&editor).subject_index(), Some(2));
    }

    #[test]
    fn test_inserting_module_before_drill_shifts_it() {
        let mut editor = editor_with_course();
        editor.add_subject(Placement::End).unwrap();
        editor.open_subject(0).unwrap();
        editor.add_module(Placement::End).unwrap();
        let target = editor.add_module(Placement::End).unwrap();
        editor.open_module(1).unwrap();

        editor.add_module(Placement::Start).unwrap();
        assert_eq!(
            drill(&editor),
            DrillPath::Module {
                subject_index: 0,
                module_index: 2
            }
        );
        assert_eq!(course(&editor).subjects[0].modules[2].id, target);

        editor.add_module(Placement::End).unwrap();
        assert_eq!(drill(&editor).module_index(), Some(2));
        assert_eq!(course(&editor).subjects[0].modules[2].id, target);
    }

    #[test]
    fn test_move_module_keeps_drilled_identity() {
        let mut editor = editor_with_course();
        editor.add_subject(Placement::End).unwrap();
        editor.add_subject(Placement::End).unwrap();
        editor.open_subject(1).unwrap();
        let ids: Vec<ModuleId> = (0..4)
            .map(|_| editor.add_module(Placement::End).unwrap())
            .collect();
        editor.open_module(1).unwrap();

        editor.move_module(1, 3).unwrap();
        assert_eq!(
            drill(&editor),
            DrillPath::Module {
                subject_index: 1,
                module_index: 3
            }
        );
        assert_eq!(course(&editor).subjects[1].modules[3].id, ids[1]);

        editor.move_module(0, 3).unwrap();
        assert_eq!(drill(&editor).module_index(), Some(2));
        assert_eq!(course(&editor).subjects[1].modules[2].id, ids[1]);
    }

    #[test]
    fn test_module_removal_and_drill() {
        let mut editor = editor_with_course();
        editor.add_subject(Placement::End).unwrap();
        editor.open_subject(0).unwrap();
        let m1 = editor.add_module(Placement::End).unwrap();
        let m2 = editor.add_module(Placement::End).unwrap();
        editor.open_module(1).unwrap();

        editor.remove_module(&m1).unwrap();
        assert_eq!(
            drill(&editor),
            DrillPath::Module {
                subject_index: 0,
                module_index: 0
            }
        );

        editor.remove_module(&m2).unwrap();
        assert_eq!(drill(&editor), DrillPath::Subject { subject_index: 0 });
        assert!(course(&editor).subjects[0].modules.is_empty());
    }

    #[test]
    fn test_move_in_empty_subject_is_rejected_without_change() {
        let mut editor = editor_with_course();
        editor.add_subject(Placement::End).unwrap();
        editor.open_subject(0).unwrap();
        let before = editor.session().unwrap().clone();

        let err = editor.move_module(0, 1).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(editor.session().unwrap(), &before);
    }

    #[test]
    fn test_drag_module_renumbers_lessons() {
        let mut editor = editor_with_course();
        editor.add_subject(Placement::End).unwrap();
        editor.open_subject(0).unwrap();
        for (title, video) in [("One", "v1"), ("Two", "v2"), ("Three", "v3")] {
            editor.add_module(Placement::End).unwrap();
            let last = course(&editor).subjects[0].modules.len() - 1;
            editor.open_module(last).unwrap();
            editor.set_module_field(ModuleField::ContentTitle, title).unwrap();
            editor.set_module_field(ModuleField::VideoRef, video).unwrap();
            editor.back().unwrap();
        }

        editor.move_module(2, 0).unwrap();
        let outline = CourseOutline::of(course(&editor));
        let lessons: Vec<_> = outline.units[0]
            .lessons
            .iter()
            .map(|l| (l.lesson_number, l.title.as_str(), l.video_ref.as_deref()))
            .collect();
        assert_eq!(
            lessons,
            vec![
                (1, "Three", Some("v3")),
                (2, "One", Some("v1")),
                (3, "Two", Some("v2")),
            ]
        );
    }

    #[test]
    fn test_field_setters_need_matching_level() {
        let mut editor = editor_with_course();
        assert!(editor.set_subject_field(SubjectField::Title, "x").is_err());
        editor.add_subject(Placement::End).unwrap();
        editor.open_subject(0).unwrap();
        editor.set_subject_field(SubjectField::Title, "Unit").unwrap();
        assert!(editor.set_module_field(ModuleField::PdfRef, "#").is_err());
        assert_eq!(course(&editor).subjects[0].title, "Unit");
    }

    #[test]
    fn test_existing_course_id_is_immutable() {
        let mut editor = TreeEditor::new();
        editor
            .open_existing(Course::create().with_id("c9"))
            .unwrap();
        let err = editor.set_course_id("other").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(course(&editor).id.as_str(), "c9");
    }

    #[test]
    fn test_save_requires_id_and_title() {
        let mut editor = TreeEditor::new();
        editor.open_new().unwrap();
        let err = editor.begin_save().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "course id is required");

        editor.set_course_id("c1").unwrap();
        let err = editor.begin_save().unwrap_err();
        assert_eq!(err.message, "course title is required");
        assert!(!editor.session().unwrap().is_saving());
    }

    #[test]
    fn test_save_success_closes_session() {
        let mut editor = editor_with_course();
        let ticket = editor.begin_save().unwrap();
        assert_eq!(ticket.course_id.as_str(), "c1");
        let outcome = editor.finish_save(ticket, Ok(())).unwrap();
        assert_eq!(outcome, SaveOutcome::Closed);
        assert!(!editor.is_open());
    }

    #[test]
    fn test_failed_save_keeps_session_unchanged() {
        let mut editor = editor_with_course();
        editor.add_subject(Placement::End).unwrap();
        let before = editor.session().unwrap().clone();

        let ticket = editor.begin_save().unwrap();
        let err = editor
            .finish_save(ticket, Err(AppError::persistence("store offline")))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Persistence);
        assert_eq!(editor.session().unwrap(), &before);
    }

    #[test]
    fn test_second_save_while_pending_conflicts() {
        let mut editor = editor_with_course();
        let ticket = editor.begin_save().unwrap();
        assert!(editor.status().is_saving);
        assert_eq!(editor.begin_save().unwrap_err().kind, ErrorKind::Conflict);
        editor.finish_save(ticket, Ok(())).unwrap();
    }

    #[test]
    fn test_edits_during_save_keep_session_open() {
        let mut editor = editor_with_course();
        let ticket = editor.begin_save().unwrap();
        editor.add_subject(Placement::End).unwrap();

        let outcome = editor.finish_save(ticket, Ok(())).unwrap();
        assert_eq!(outcome, SaveOutcome::StillOpen);
        let session = editor.session().unwrap();
        assert!(!session.is_new);
        assert_eq!(session.base_course.subjects.len(), 1);
        assert!(editor.set_course_id("renamed").is_err());
    }

    #[test]
    fn test_discard_detaches_pending_save() {
        let mut editor = editor_with_course();
        let ticket = editor.begin_save().unwrap();
        assert!(editor.discard());
        editor.open_new().unwrap();

        let outcome = editor
            .finish_save(ticket, Err(AppError::persistence("late failure")))
            .unwrap();
        assert_eq!(outcome, SaveOutcome::Detached);
        assert!(editor.is_open());
    }

    #[test]
    fn test_forget_course_only_closes_stored_course() {
        let mut editor = TreeEditor::new();
        editor
            .open_existing(Course::create().with_id("c1"))
            .unwrap();
        assert!(!editor.forget_course(&CourseId::new("c2")));
        assert!(editor.forget_course(&CourseId::new("c1")));
        assert!(!editor.is_open());
    }
}
