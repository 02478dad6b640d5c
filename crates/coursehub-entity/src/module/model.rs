//! Lesson module entity model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use coursehub_core::error::AppError;
use coursehub_core::types::ModuleId;

use super::resource;

/// A single lesson: title, description, video and two optional resources.
///
/// Missing fields deserialize as empty strings so that documents written
/// by older clients never yield absent values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Module {
    /// Identifier, unique within the owning subject. Never regenerated.
    pub id: ModuleId,
    /// Lesson title.
    pub content_title: String,
    /// Lesson description.
    pub content_description: String,
    /// Video reference (embed URL or video id).
    pub video_ref: String,
    /// Lecture notes PDF link; `""` or `"#"` when absent.
    pub pdf_ref: String,
    /// Practice sheet link; `""` or `"#"` when absent.
    pub practice_ref: String,
}

impl Module {
    /// Create an empty module with a freshly generated id.
    pub fn create() -> Self {
        Self {
            id: ModuleId::generate(),
            ..Self::default()
        }
    }

    /// Create an empty module whose id differs from every id in `siblings`.
    pub fn create_among(siblings: &[Module]) -> Self {
        Self {
            id: ModuleId::generate_unique(|id| siblings.iter().any(|m| &m.id == id)),
            ..Self::default()
        }
    }

    /// Return a copy with `field` set to `value`.
    pub fn set_field(&self, field: ModuleField, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut next = self.clone();
        match field {
            ModuleField::ContentTitle => next.content_title = value,
            ModuleField::ContentDescription => next.content_description = value,
            ModuleField::VideoRef => next.video_ref = value,
            ModuleField::PdfRef => next.pdf_ref = value,
            ModuleField::PracticeRef => next.practice_ref = value,
        }
        next
    }

    /// Read the current value of `field`.
    pub fn field(&self, field: ModuleField) -> &str {
        match field {
            ModuleField::ContentTitle => &self.content_title,
            ModuleField::ContentDescription => &self.content_description,
            ModuleField::VideoRef => &self.video_ref,
            ModuleField::PdfRef => &self.pdf_ref,
            ModuleField::PracticeRef => &self.practice_ref,
        }
    }

    /// Whether a video is attached.
    pub fn has_video(&self) -> bool {
        resource::is_available(&self.video_ref)
    }

    /// Whether a lecture-notes PDF is attached.
    pub fn has_pdf(&self) -> bool {
        resource::is_available(&self.pdf_ref)
    }

    /// Whether a practice sheet is attached.
    pub fn has_practice_sheet(&self) -> bool {
        resource::is_available(&self.practice_ref)
    }
}

/// Editable text fields of a [`Module`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModuleField {
    /// `contentTitle`
    ContentTitle,
    /// `contentDescription`
    ContentDescription,
    /// `videoRef`
    VideoRef,
    /// `pdfRef`
    PdfRef,
    /// `practiceRef`
    PracticeRef,
}

impl ModuleField {
    /// Every field, in display order.
    pub const ALL: [ModuleField; 5] = [
        Self::ContentTitle,
        Self::ContentDescription,
        Self::VideoRef,
        Self::PdfRef,
        Self::PracticeRef,
    ];

    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContentTitle => "contentTitle",
            Self::ContentDescription => "contentDescription",
            Self::VideoRef => "videoRef",
            Self::PdfRef => "pdfRef",
            Self::PracticeRef => "practiceRef",
        }
    }
}

impl fmt::Display for ModuleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contentTitle" | "content_title" | "title" => Ok(Self::ContentTitle),
            "contentDescription" | "content_description" | "description" => {
                Ok(Self::ContentDescription)
            }
            "videoRef" | "video_ref" => Ok(Self::VideoRef),
            "pdfRef" | "pdf_ref" => Ok(Self::PdfRef),
            "practiceRef" | "practice_ref" => Ok(Self::PracticeRef),
            _ => Err(AppError::validation(format!("Unknown module field: '{s}'"))),
        }
    }
}
