//! Catalog store selection and catalog presentation settings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which catalog store backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// PostgreSQL document table.
    Postgres,
    /// In-process map; contents are lost on restart.
    Memory,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres => write!(f, "postgres"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Store backend.
    #[serde(default = "default_store")]
    pub store: StoreBackend,
    /// Seed a demo course when the catalog is empty at startup.
    #[serde(default = "default_true")]
    pub seed_demo: bool,
    /// Category labels that drive UI affordances (icons, grouping).
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            store: default_store(),
            seed_demo: default_true(),
            categories: default_categories(),
        }
    }
}

fn default_store() -> StoreBackend {
    StoreBackend::Memory
}

fn default_true() -> bool {
    true
}

fn default_categories() -> Vec<String> {
    ["Skill Development", "Academic", "Admission", "Jobs"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
