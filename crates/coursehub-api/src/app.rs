//! Application builder: wires router, middleware, and state into an Axum app.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use coursehub_core::config::AppConfig;
use coursehub_core::error::AppError;
use coursehub_database::{CatalogStore, connect_store, seed};

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds.max(1));
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(TimeoutLayer::new(timeout))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Prepare the store for serving: seed the demo course when configured.
pub async fn prepare_store(config: &AppConfig, store: &CatalogStore) -> Result<(), AppError> {
    if config.catalog.seed_demo {
        seed::seed_if_empty(store).await?;
    }
    Ok(())
}

/// Runs the CourseHub server until Ctrl+C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting CourseHub server...");

    // ── Step 1: Connect the catalog store ────────────────────────
    tracing::info!(backend = %config.catalog.store, "Connecting catalog store...");
    let store: Arc<CatalogStore> = connect_store(&config).await?;

    // ── Step 2: Seed demo content ────────────────────────────────
    prepare_store(&config, store.as_ref()).await?;

    // ── Step 3: Build and start HTTP server ──────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, store);
    spawn_session_sweeper(state.clone());
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("CourseHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("CourseHub server stopped");
    Ok(())
}

/// Periodically drop expired admin sessions and their editors.
fn spawn_session_sweeper(state: AppState) {
    let period = Duration::from_secs(state.config.admin.sweep_interval_seconds.max(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            state.sweep_expired_sessions();
        }
    });
    tracing::info!(interval_seconds = period.as_secs(), "Admin session sweeper started");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
