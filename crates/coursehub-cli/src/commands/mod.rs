//! CLI command definitions and dispatch.

pub mod courses;
pub mod migrate;
pub mod seed;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use coursehub_core::config::{AppConfig, StoreBackend};
use coursehub_core::error::AppError;
use coursehub_database::{CatalogStore, connect_store};

use crate::output::OutputFormat;

/// CourseHub catalog administration
#[derive(Debug, Parser)]
#[command(name = "coursehub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Course catalog management
    Courses(courses::CoursesArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Seed the demo course into an empty catalog
    Seed,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Courses(args) => courses::execute(args, &self.config, self.format).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config, self.format).await,
            Commands::Seed => seed::execute(&self.config).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_from(config_path, None)
}

/// Helper: open the configured catalog store.
///
/// The in-memory backend starts empty for every process, so CLI commands
/// require the persistent one.
pub async fn open_store(config: &AppConfig) -> Result<Arc<CatalogStore>, AppError> {
    if config.catalog.store == StoreBackend::Memory {
        return Err(AppError::configuration(
            "catalog.store is \"memory\"; CLI commands need catalog.store = \"postgres\" \
             (set COURSEHUB__CATALOG__STORE=postgres and COURSEHUB__DATABASE__URL)",
        ));
    }
    connect_store(config).await
}
