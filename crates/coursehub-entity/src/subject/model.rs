//! Subject entity model and its module-level edit operations.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use coursehub_core::error::AppError;
use coursehub_core::result::AppResult;
use coursehub_core::types::{ModuleId, SubjectId};

use crate::module::Module;
use crate::sequence::{self, Placement};

/// A unit of a course: its own title/description/image plus ordered lessons.
///
/// `modules[n]` is lesson `n + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subject {
    /// Identifier, unique within the owning course.
    pub id: SubjectId,
    /// Subject title.
    pub title: String,
    /// Subject description.
    pub description: String,
    /// Cover image reference; empty when none.
    pub image_ref: String,
    /// Lessons in display order.
    pub modules: Vec<Module>,
}

impl Subject {
    /// Create an empty subject with a freshly generated id.
    pub fn create() -> Self {
        Self {
            id: SubjectId::generate(),
            ..Self::default()
        }
    }

    /// Create an empty subject whose id differs from every id in `siblings`.
    pub fn create_among(siblings: &[Subject]) -> Self {
        Self {
            id: SubjectId::generate_unique(|id| siblings.iter().any(|s| &s.id == id)),
            ..Self::default()
        }
    }

    /// Create an empty module suitable for insertion into this subject.
    pub fn new_module(&self) -> Module {
        Module::create_among(&self.modules)
    }

    /// Position of the module with `id`, if present.
    pub fn module_index(&self, id: &ModuleId) -> Option<usize> {
        self.modules.iter().position(|m| &m.id == id)
    }

    /// Return a copy with `module` inserted at `placement`.
    ///
    /// Fails with `Validation` for a blank id and `Conflict` when a sibling
    /// already carries the same id.
    pub fn insert_module(&self, module: Module, placement: Placement) -> AppResult<Self> {
        if module.id.is_blank() {
            return Err(AppError::validation("module id is required"));
        }
        if self.module_index(&module.id).is_some() {
            return Err(AppError::conflict(format!(
                "subject '{}' already has a module with id '{}'",
                self.id, module.id
            )));
        }
        Ok(Self {
            modules: sequence::inserted(&self.modules, module, placement),
            ..self.clone()
        })
    }

    /// Return a copy without the module carrying `id`.
    ///
    /// Removing an id that is not present returns an equal subject.
    pub fn remove_module(&self, id: &ModuleId) -> Self {
        match sequence::without(&self.modules, |m| &m.id == id) {
            Some(modules) => Self {
                modules,
                ..self.clone()
            },
            None => self.clone(),
        }
    }

    /// Return a copy with the module at `from` relocated to `to`.
    ///
    /// `to` is clamped into range; an empty list or an out-of-range `from`
    /// yields `NotFound`.
    pub fn move_module(&self, from: usize, to: usize) -> AppResult<Self> {
        Ok(Self {
            modules: sequence::relocated(&self.modules, from, to, "module")?,
            ..self.clone()
        })
    }

    /// Return a copy with the module at `index` replaced by `edit(module)`.
    ///
    /// The module keeps its id whatever `edit` returns.
    pub fn update_module(
        &self,
        index: usize,
        edit: impl FnOnce(&Module) -> Module,
    ) -> AppResult<Self> {
        let current = self.modules.get(index).ok_or_else(|| {
            AppError::not_found(format!(
                "no module at position {index} in subject '{}'",
                self.id
            ))
        })?;

        let mut edited = edit(current);
        edited.id = current.id.clone();

        let mut modules = self.modules.clone();
        modules[index] = edited;
        Ok(Self {
            modules,
            ..self.clone()
        })
    }

    /// Return a copy with `field` set to `value`.
    pub fn set_field(&self, field: SubjectField, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut next = self.clone();
        match field {
            SubjectField::Title => next.title = value,
            SubjectField::Description => next.description = value,
            SubjectField::ImageRef => next.image_ref = value,
        }
        next
    }

    /// Read the current value of `field`.
    pub fn field(&self, field: SubjectField) -> &str {
        match field {
            SubjectField::Title => &self.title,
            SubjectField::Description => &self.description,
            SubjectField::ImageRef => &self.image_ref,
        }
    }

    /// Whether every module id is non-blank and unique within this subject.
    pub fn has_unique_module_ids(&self) -> bool {
        let mut seen = HashSet::new();
        self.modules
            .iter()
            .all(|m| !m.id.is_blank() && seen.insert(&m.id))
    }
}

/// Editable text fields of a [`Subject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubjectField {
    /// `title`
    Title,
    /// `description`
    Description,
    /// `imageRef`
    ImageRef,
}

impl SubjectField {
    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::ImageRef => "imageRef",
        }
    }
}

impl fmt::Display for SubjectField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubjectField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "imageRef" | "image_ref" | "image" => Ok(Self::ImageRef),
            _ => Err(AppError::validation(format!("Unknown subject field: '{s}'"))),
        }
    }
}
