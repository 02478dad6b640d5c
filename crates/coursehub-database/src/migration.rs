//! Schema migrations for the PostgreSQL catalog store.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use coursehub_core::error::{AppError, ErrorKind};
use coursehub_core::result::AppResult;

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// A migration known to this build and whether the database has applied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationStatus {
    /// Migration version (timestamp prefix of the file name).
    pub version: i64,
    /// Human-readable description from the file name.
    pub description: String,
    /// Whether the version is recorded in `_sqlx_migrations`.
    pub applied: bool,
}

/// Apply every pending migration. Returns how many were newly applied.
pub async fn run_migrations(pool: &PgPool) -> AppResult<usize> {
    let before = applied_versions(pool).await?;
    info!(known = MIGRATOR.iter().count(), "Running catalog migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    let applied = MIGRATOR
        .iter()
        .filter(|m| !before.contains(&m.version))
        .count();
    info!(applied, "Catalog migrations completed");
    Ok(applied)
}

/// Report every known migration and whether it has been applied.
pub async fn migration_status(pool: &PgPool) -> AppResult<Vec<MigrationStatus>> {
    let applied = applied_versions(pool).await?;
    Ok(MIGRATOR
        .iter()
        .map(|m| MigrationStatus {
            version: m.version,
            description: m.description.to_string(),
            applied: applied.contains(&m.version),
        })
        .collect())
}

/// Versions recorded by sqlx; empty when the bookkeeping table does not exist yet.
async fn applied_versions(pool: &PgPool) -> AppResult<Vec<i64>> {
    let exists: bool =
        sqlx::query_scalar("SELECT to_regclass('_sqlx_migrations') IS NOT NULL")
            .fetch_one(pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to inspect migrations", e)
            })?;
    if !exists {
        return Ok(Vec::new());
    }

    sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success ORDER BY version")
        .fetch_all(pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list applied migrations", e)
        })
}
