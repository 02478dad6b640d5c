//! Catalog store implementations and the backend factory.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use tracing::info;

use coursehub_core::config::{AppConfig, StoreBackend};
use coursehub_core::result::AppResult;
use coursehub_core::traits::DocumentStore;
use coursehub_entity::Course;

use crate::connection::DatabasePool;
use crate::migration;

pub use memory::MemoryCatalogStore;
pub use postgres::PgCatalogStore;

/// The catalog store contract: whole [`Course`] documents keyed by course id.
pub type CatalogStore = dyn DocumentStore<Course>;

/// Build the catalog store selected by `catalog.store`.
///
/// The postgres backend connects, then applies pending migrations.
pub async fn connect_store(config: &AppConfig) -> AppResult<Arc<CatalogStore>> {
    info!(backend = %config.catalog.store, "Opening catalog store");
    match config.catalog.store {
        StoreBackend::Memory => Ok(Arc::new(MemoryCatalogStore::new())),
        StoreBackend::Postgres => {
            let db = DatabasePool::connect(&config.database).await?;
            migration::run_migrations(db.pool()).await?;
            Ok(Arc::new(PgCatalogStore::new(db)))
        }
    }
}
