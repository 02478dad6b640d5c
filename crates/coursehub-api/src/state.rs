//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use coursehub_core::config::AppConfig;
use coursehub_database::CatalogStore;
use coursehub_service::{AdminGate, CatalogService, EditorRegistry};

/// Shared dependencies handed to every handler through `State<AppState>`.
///
/// All fields are `Arc`-wrapped so cloning per request is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Catalog store.
    pub store: Arc<CatalogStore>,
    /// Public catalog reads and admin document writes.
    pub catalog: Arc<CatalogService>,
    /// Admin sessions.
    pub admin_gate: Arc<AdminGate>,
    /// Per-admin tree editors.
    pub editors: Arc<EditorRegistry>,
    /// Process start, for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    /// Wire every service over `store`.
    pub fn new(config: AppConfig, store: Arc<CatalogStore>) -> Self {
        let catalog = Arc::new(CatalogService::new(store.clone(), config.catalog.clone()));
        let admin_gate = Arc::new(AdminGate::new(config.admin.clone()));
        let editors = Arc::new(EditorRegistry::new(store.clone()));
        Self {
            config: Arc::new(config),
            store,
            catalog,
            admin_gate,
            editors,
            started_at: Instant::now(),
        }
    }

    /// Remove expired admin sessions and the editors they left behind.
    ///
    /// Sessions dropped earlier by a failed `verify` are caught here too,
    /// since editors are kept only for tokens that are still active.
    /// Returns the number of editors released.
    pub fn sweep_expired_sessions(&self) -> usize {
        let expired = self.admin_gate.purge_expired();
        let released = self
            .editors
            .retain_active(|token| self.admin_gate.is_active(token));
        if !expired.is_empty() || released > 0 {
            tracing::info!(
                expired_sessions = expired.len(),
                released_editors = released,
                "Swept expired admin sessions"
            );
        }
        released
    }
}
