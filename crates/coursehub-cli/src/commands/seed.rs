//! Demo seed command.

use coursehub_core::error::AppError;
use coursehub_database::seed;

use crate::output;

/// Upsert the demo course when the catalog is empty.
pub async fn execute(config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let store = super::open_store(&config).await?;

    if seed::seed_if_empty(store.as_ref()).await? {
        output::print_success(&format!("Seeded demo course '{}'", seed::DEMO_COURSE_ID));
    } else {
        output::print_warning("Catalog is not empty; nothing seeded.");
    }
    Ok(())
}
