//! JobSite Gateway server
//!
//! Main entry point: loads configuration, initializes logging, and serves
//! the API until Ctrl+C or SIGTERM.

use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use jobsite_core::config::AppConfig;
use jobsite_core::error::AppError;

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

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from `JOBSITE_CONFIG`, or from `config/default.toml`
/// plus the `JOBSITE_ENV` overlay.
fn load_configuration() -> Result<AppConfig, AppError> {
    match std::env::var("JOBSITE_CONFIG") {
        Ok(path) => AppConfig::load_from(&path),
        Err(_) => {
            let env = std::env::var("JOBSITE_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
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

/// Serve until a shutdown signal, then allow in-flight requests the
/// configured grace period.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting JobSite Gateway v{}", env!("CARGO_PKG_VERSION"));

    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let mut server = tokio::spawn(jobsite_api::run_server(config, async move {
        let _ = shutdown_rx.changed().await;
    }));

    tokio::select! {
        result = &mut server => return flatten(result),
        _ = shutdown_signal() => {}
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
    let _ = shutdown_tx.send(true);

    match tokio::time::timeout(grace, server).await {
        Ok(result) => flatten(result),
        Err(_) => {
            tracing::warn!(grace_seconds = grace.as_secs(), "Grace period elapsed, exiting");
            Ok(())
        }
    }
}

fn flatten(result: Result<Result<(), AppError>, tokio::task::JoinError>) -> Result<(), AppError> {
    result.map_err(|e| AppError::internal(format!("Server task failed: {e}")))?
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
