//! `earlybird` server entry point.
//!
//! Bootstraps the lead store, confirmation notifier, and signup workflow,
//! then starts the Axum HTTP server with graceful shutdown.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use earlybird_core::notify::{NoopNotifier, Notifier};
use earlybird_core::session::SubmissionState;
use earlybird_core::submit::SignupWorkflow;
use earlybird_store::{LeadStore, MemoryStore};

use earlybird_server::config::{ServerConfig, StoreBackendType};
use earlybird_server::notify::HttpNotifier;
use earlybird_server::routes;
use earlybird_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment.
    let config = ServerConfig::from_env();

    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    info!(store = ?config.store_backend, "earlybird starting");

    let state = build_app_state(&config).await?;
    let app = routes::app(state);

    // Bind and serve.
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "earlybird listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("earlybird stopped");
    Ok(())
}

/// Build the shared application state from configuration.
async fn build_app_state(config: &ServerConfig) -> anyhow::Result<AppState> {
    // Bootstrap the lead store.
    let store: Arc<dyn LeadStore> = match &config.store_backend {
        StoreBackendType::Memory => {
            info!("using in-memory lead store (data will not persist)");
            Arc::new(MemoryStore::new())
        }
        #[cfg(feature = "postgres-backend")]
        StoreBackendType::Postgres { url } => {
            info!(url = %"[redacted]", "using PostgreSQL lead store");
            Arc::new(
                earlybird_store::PostgresStore::connect(url)
                    .await
                    .context("failed to connect to PostgreSQL lead store")?,
            )
        }
        #[cfg(not(feature = "postgres-backend"))]
        StoreBackendType::Postgres { .. } => {
            anyhow::bail!(
                "PostgreSQL store requested but feature 'postgres-backend' is not enabled"
            );
        }
    };

    // Confirmation notifier — enabled by configuration, no-op otherwise.
    let notifier: Arc<dyn Notifier> = match &config.notify {
        Some(notify_config) => {
            info!(url = %notify_config.function_url, "confirmation notifier enabled");
            Arc::new(
                HttpNotifier::new(notify_config)
                    .context("failed to build confirmation notifier")?,
            )
        }
        None => {
            info!("no confirmation function configured, notifications disabled");
            Arc::new(NoopNotifier)
        }
    };

    let session = Arc::new(SubmissionState::new());
    let workflow = SignupWorkflow::new(Arc::clone(&store), notifier, Arc::clone(&session));

    Ok(AppState {
        workflow,
        store,
        session,
    })
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
