//! Newtype wrappers around opaque string identifiers.
//!
//! Course ids are chosen by the admin and double as the catalog store key;
//! subject and module ids are generated. Distinct types keep a `ModuleId`
//! from being passed where a `SubjectId` is expected.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a newtype ID wrapper around `String`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier string.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Generate a fresh random identifier (UUID v4, simple form).
            pub fn generate() -> Self {
                Self(Uuid::new_v4().simple().to_string())
            }

            /// Generate a fresh identifier for which `taken` returns `false`.
            pub fn generate_unique(taken: impl Fn(&Self) -> bool) -> Self {
                loop {
                    let candidate = Self::generate();
                    if !taken(&candidate) {
                        return candidate;
                    }
                }
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the identifier and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Whether the identifier is empty or whitespace only.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a course; also the catalog store's primary key.
    CourseId
);

define_id!(
    /// Identifier of a subject, unique within its course.
    SubjectId
);

define_id!(
    /// Identifier of a lesson module, unique within its subject.
    ModuleId
);
