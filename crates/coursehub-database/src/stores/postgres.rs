//! PostgreSQL catalog store: one JSONB document per course.

use async_trait::async_trait;
use sqlx::types::Json;
use tracing::{error, info};

use coursehub_core::error::{AppError, ErrorKind};
use coursehub_core::result::AppResult;
use coursehub_core::traits::DocumentStore;
use coursehub_entity::Course;

use crate::connection::DatabasePool;

/// Catalog store backed by the `courses` table.
#[derive(Debug, Clone)]
pub struct PgCatalogStore {
    db: DatabasePool,
}

impl PgCatalogStore {
    /// Create a store over an open pool. Migrations must already be applied.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

fn persistence(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        error!(error = %e, "{message}");
        AppError::with_source(ErrorKind::Persistence, message, e)
    }
}

#[async_trait]
impl DocumentStore<Course> for PgCatalogStore {
    async fn list_all(&self) -> AppResult<Vec<Course>> {
        let rows: Vec<Json<Course>> =
            sqlx::query_scalar("SELECT document FROM courses ORDER BY created_at ASC, id ASC")
                .fetch_all(self.db.pool())
                .await
                .map_err(persistence("Failed to list courses"))?;
        Ok(rows.into_iter().map(|Json(course)| course).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        let row: Option<Json<Course>> =
            sqlx::query_scalar("SELECT document FROM courses WHERE id = $1")
                .bind(id)
                .fetch_optional(self.db.pool())
                .await
                .map_err(persistence("Failed to find course"))?;
        Ok(row.map(|Json(course)| course))
    }

    async fn upsert(&self, id: &str, doc: &Course) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO courses (id, document) VALUES ($1, $2) \
             ON CONFLICT (id) DO UPDATE SET document = EXCLUDED.document, updated_at = NOW()",
        )
        .bind(id)
        .bind(Json(doc))
        .execute(self.db.pool())
        .await
        .map_err(persistence("Failed to save course"))?;

        info!(course_id = %id, "Course saved");
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await
            .map_err(persistence("Failed to delete course"))?;

        let removed = result.rows_affected() > 0;
        info!(course_id = %id, removed, "Course deleted");
        Ok(removed)
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.db.ping().await
    }
}
