//! Database migration command.

use jobsite_core::config::DatabaseBackend;
use jobsite_core::error::AppError;
use jobsite_database::DatabasePool;
use jobsite_database::migration::run_migrations;

use crate::output;

/// Connect to PostgreSQL and apply pending migrations.
pub async fn execute(config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    if config.database.backend != DatabaseBackend::Postgres {
        return Err(AppError::configuration(
            "migrate requires database.backend = \"postgres\"",
        ));
    }

    let pool = DatabasePool::connect(&config.database).await?;
    run_migrations(pool.pool()).await?;
    output::print_success("Migrations applied");
    Ok(())
}
