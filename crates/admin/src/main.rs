//! Storedash Admin - back office JSON API.
//!
//! This binary serves the dashboard API on port 3001, backed by an NDJSON
//! export of the content store.
//!
//! # Architecture
//!
//! - Axum web framework
//! - In-memory snapshot of the content store, loaded at startup
//! - Pure view aggregation per request

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use storedash_admin::config::DashboardConfig;
use storedash_admin::state::AppState;
use storedash_admin::store::SnapshotStore;

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for the log format)
    let config = DashboardConfig::from_env().expect("Failed to load configuration");

    storedash_admin::init_tracing(config.log_format);

    let store = SnapshotStore::load(&config.export_path)
        .await
        .expect("Failed to load content export");

    let state = AppState::new(config.credentials.clone(), Arc::new(store));
    let app = storedash_admin::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storedash admin listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
