//! Configuration validation.

use jobsite_auth::{BootstrapAdminSource, PinHasher};
use jobsite_core::config::AdminSource;
use jobsite_core::error::AppError;
use jobsite_database::connection::mask_password;

use crate::output::{self, OutputFormat};

/// Load the configuration and check everything the server checks at startup.
pub fn execute(config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = match super::load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            output::print_error(&format!("Configuration invalid: {e}"));
            return Err(e);
        }
    };

    let secret = config.signing_secret()?;
    config.auth.token_ttl_seconds()?;
    if config.auth.admin_source == AdminSource::Bootstrap {
        BootstrapAdminSource::new(&config.auth.bootstrap_admin, PinHasher::new())?;
    }

    if format == OutputFormat::Table {
        output::print_success(&format!("Configuration '{config_path}' is valid"));
        if secret.is_dev_fallback() {
            output::print_warning("Using the development fallback signing secret");
        }
    }

    output::print_fields(
        &[
            ("environment", config.server.environment.to_string()),
            ("listen", format!("{}:{}", config.server.host, config.server.port)),
            ("database", format!("{:?}", config.database.backend).to_lowercase()),
            ("database_url", mask_password(&config.database.url)),
            ("admin_source", format!("{:?}", config.auth.admin_source).to_lowercase()),
            ("token_ttl_hours", config.auth.token_ttl_hours.to_string()),
            ("dev_fallback_secret", secret.is_dev_fallback().to_string()),
        ],
        format,
    );
    Ok(())
}
