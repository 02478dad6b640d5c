//! Keyed document store contract.

use async_trait::async_trait;

use crate::result::AppResult;

/// Durable keyed collection of whole documents.
///
/// Every write replaces the full document stored under `id`
/// (last write wins); there is no partial update and no version check.
/// Implementations report rejected calls as
/// [`ErrorKind::Persistence`](crate::error::ErrorKind::Persistence) or
/// [`ErrorKind::Database`](crate::error::ErrorKind::Database).
#[async_trait]
pub trait DocumentStore<Doc>: Send + Sync + std::fmt::Debug + 'static
where
    Doc: Send + Sync + 'static,
{
    /// Return every stored document, in insertion order.
    async fn list_all(&self) -> AppResult<Vec<Doc>>;

    /// Fetch a single document by id.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Doc>>;

    /// Create or replace the document stored under `id`.
    async fn upsert(&self, id: &str, doc: &Doc) -> AppResult<()>;

    /// Remove the document stored under `id`. Returns `true` if one was removed.
    async fn delete_by_id(&self, id: &str) -> AppResult<bool>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
