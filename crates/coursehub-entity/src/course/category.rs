//! Catalog category labels.
//!
//! A course stores its category as a free string; this enum only
//! recognises the built-in labels so views can pick an icon or group.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Built-in catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Practical skill courses.
    #[serde(rename = "Skill Development")]
    SkillDevelopment,
    /// School and university coursework.
    Academic,
    /// Admission test preparation.
    Admission,
    /// Job exam preparation.
    Jobs,
}

impl Category {
    /// Every built-in category, in menu order.
    pub const ALL: [Category; 4] = [
        Self::SkillDevelopment,
        Self::Academic,
        Self::Admission,
        Self::Jobs,
    ];

    /// Display label, as stored on courses.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SkillDevelopment => "Skill Development",
            Self::Academic => "Academic",
            Self::Admission => "Admission",
            Self::Jobs => "Jobs",
        }
    }

    /// Icon name used by the catalog view.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::SkillDevelopment => "wrench",
            Self::Academic => "book-open",
            Self::Admission => "graduation-cap",
            Self::Jobs => "briefcase",
        }
    }

    /// Recognise a stored label; unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = coursehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| {
            coursehub_core::AppError::validation(format!(
                "Unknown category: '{s}'. Expected one of: Skill Development, Academic, Admission, Jobs"
            ))
        })
    }
}
