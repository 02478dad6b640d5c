//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod admin;
pub mod app;
pub mod catalog;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::admin::AdminConfig;
pub use self::app::{CorsConfig, ServerConfig};
pub use self::catalog::{CatalogConfig, StoreBackend};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for the merged configuration
/// (default.toml + environment overlay + `COURSEHUB__*` variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings (used by the postgres store).
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Catalog store settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Shared admin credential.
    #[serde(default)]
    pub admin: AdminConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default`, `config/{env}` and environment variables
    /// prefixed with `COURSEHUB__` (e.g. `COURSEHUB__SERVER__PORT=8080`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config/default", Some(&format!("config/{env}")))
    }

    /// Load configuration from an explicit base file and optional overlay.
    ///
    /// Missing files are tolerated; every section has defaults.
    pub fn load_from(base: &str, overlay: Option<&str>) -> Result<Self, AppError> {
        let mut builder =
            config::Config::builder().add_source(config::File::with_name(base).required(false));

        if let Some(overlay) = overlay {
            builder = builder.add_source(config::File::with_name(overlay).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("COURSEHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let app: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        app.validate()?;
        Ok(app)
    }

    /// Reject combinations that cannot start.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.catalog.store == StoreBackend::Postgres && self.database.url.trim().is_empty() {
            return Err(AppError::configuration(
                "database.url is required when catalog.store = \"postgres\"",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_memory_store() {
        let config = AppConfig::default();
        assert_eq!(config.catalog.store, StoreBackend::Memory);
        assert_eq!(config.server.port, 3000);
        assert!(config.catalog.seed_demo);
        assert_eq!(config.catalog.categories.len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_admin_password_still_validates() {
        let config = AppConfig::default();
        assert!(config.admin.password.is_empty());
        assert!(config.validate().is_ok());
        assert_eq!(config.admin.sweep_interval_seconds, 300);
    }

    #[test]
    fn test_postgres_requires_url() {
        let mut config = AppConfig::default();
        config.catalog.store = StoreBackend::Postgres;
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
    }

    #[test]
    fn test_store_backend_parses_lowercase() {
        let parsed: CatalogConfig =
            serde_json::from_str(r#"{ "store": "postgres" }"#).expect("deserialize");
        assert_eq!(parsed.store, StoreBackend::Postgres);
        assert!(parsed.seed_demo);
    }
}
