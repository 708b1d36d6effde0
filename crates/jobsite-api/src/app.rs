//! Application builder: wires router, middleware and state into an Axum app.

use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use jobsite_core::config::AppConfig;
use jobsite_core::error::AppError;
use jobsite_database::StoreManager;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let config = state.config.clone();
    build_router(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.server.request_timeout_seconds),
        ))
        .layer(build_cors_layer(&config.server.cors))
        .layer(TraceLayer::new_for_http())
}

/// Runs the JobSite server until `shutdown` completes.
pub async fn run_server(
    config: AppConfig,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> Result<(), AppError> {
    tracing::info!(
        environment = %config.server.environment,
        backend = ?config.database.backend,
        "Starting JobSite server..."
    );

    let store = StoreManager::new(&config.database).await?;
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, store)?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("JobSite server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("JobSite server stopped");
    Ok(())
}
