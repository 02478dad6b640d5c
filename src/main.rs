//! CourseHub Server: course catalog and lesson viewer with a tree editor.
//!
//! Main entry point that loads configuration, initialises logging, and
//! serves the API.

use tracing_subscriber::{EnvFilter, fmt};

use coursehub_core::config::AppConfig;
use coursehub_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!("Starting CourseHub v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = coursehub_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment.
///
/// `COURSEHUB_CONFIG` names the base file and `COURSEHUB_ENV` the overlay
/// under `config/`.
fn load_configuration() -> Result<AppConfig, AppError> {
    let base =
        std::env::var("COURSEHUB_CONFIG").unwrap_or_else(|_| "config/default".to_string());
    let env = std::env::var("COURSEHUB_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load_from(&base, Some(&format!("config/{env}")))
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
