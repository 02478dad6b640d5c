//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use coursehub_api::{AppState, build_app, prepare_store};
use coursehub_core::config::{AppConfig, StoreBackend};
use coursehub_database::{CatalogStore, MemoryCatalogStore};

/// Admin password configured for every test app.
pub const ADMIN_PASSWORD: &str = "test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Catalog store for direct inspection
    pub store: Arc<CatalogStore>,
    /// Shared state behind the router
    pub state: AppState,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a test application over an empty in-memory catalog.
    pub async fn new() -> Self {
        Self::build(|_| {}).await
    }

    /// Create a test application with the demo course seeded.
    pub async fn with_demo() -> Self {
        Self::build(|config| config.catalog.seed_demo = true).await
    }

    /// Create a test application whose admin tokens live `minutes`.
    pub async fn with_session_ttl(minutes: u64) -> Self {
        Self::build(|config| config.admin.session_ttl_minutes = minutes).await
    }

    async fn build(configure: impl FnOnce(&mut AppConfig)) -> Self {
        let mut config = AppConfig::default();
        config.catalog.store = StoreBackend::Memory;
        config.catalog.seed_demo = false;
        config.admin.password = ADMIN_PASSWORD.to_string();
        configure(&mut config);

        let store: Arc<CatalogStore> = Arc::new(MemoryCatalogStore::new());
        prepare_store(&config, store.as_ref())
            .await
            .expect("Failed to prepare store");

        let state = AppState::new(config.clone(), store.clone());
        let router = build_app(state.clone());

        Self {
            router,
            store,
            state,
            config,
        }
    }

    /// Login as the configured admin and return the bearer token
    pub async fn login(&self) -> String {
        let body = serde_json::json!({
            "username": self.config.admin.username,
            "password": ADMIN_PASSWORD,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.data()["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` field of a success envelope.
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// The `error` code of a failure body.
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
