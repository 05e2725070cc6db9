//! Server configuration for `earlybird`.
//!
//! Loads configuration from environment variables with sensible defaults.
//! All settings can be overridden via `EARLYBIRD_*` environment variables.

use std::net::SocketAddr;
use std::time::Duration;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Lead store backend type.
    pub store_backend: StoreBackendType,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Confirmation notifier configuration (None disables notifications).
    pub notify: Option<NotifyConfig>,
}

/// Configuration for the remote confirmation-email function.
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    /// URL of the function invoked after each stored lead.
    pub function_url: String,
    /// Bearer token sent with each invocation (optional).
    pub bearer_token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// Supported lead store backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackendType {
    /// In-memory (development only, data lost on restart).
    Memory,
    /// PostgreSQL persistent store (recommended for production).
    Postgres { url: String },
}

/// Default notifier timeout in seconds.
const DEFAULT_NOTIFY_TIMEOUT_SECS: u64 = 10;

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT` — port to bind on (PaaS convention, binds to `0.0.0.0`)
    /// - `EARLYBIRD_BIND_ADDR` — full bind address (overrides `PORT`, default: `127.0.0.1:8080`)
    /// - `EARLYBIRD_STORE` — `memory` or `postgres` (default: `memory`)
    /// - `DATABASE_URL` — PostgreSQL connection string (required when `EARLYBIRD_STORE=postgres`)
    /// - `EARLYBIRD_LOG_LEVEL` — log filter (default: `info`)
    /// - `EARLYBIRD_NOTIFY_URL` — confirmation function URL (unset disables notifications)
    /// - `EARLYBIRD_NOTIFY_TOKEN` — bearer token for the confirmation function (optional)
    /// - `EARLYBIRD_NOTIFY_TIMEOUT_SECS` — notifier request timeout (default: `10`)
    #[must_use]
    pub fn from_env() -> Self {
        // Priority: EARLYBIRD_BIND_ADDR > PORT > default 127.0.0.1:8080
        let bind_addr = if let Ok(addr) = std::env::var("EARLYBIRD_BIND_ADDR") {
            addr.parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 8080)))
        } else if let Ok(port_str) = std::env::var("PORT") {
            let port: u16 = port_str.parse().unwrap_or(8080);
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            SocketAddr::from(([127, 0, 0, 1], 8080))
        };

        let store_backend = match std::env::var("EARLYBIRD_STORE")
            .unwrap_or_else(|_| "memory".to_owned())
            .to_lowercase()
            .as_str()
        {
            "postgres" | "postgresql" => {
                let url = std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgres://localhost/earlybird".to_owned());
                StoreBackendType::Postgres { url }
            }
            _ => StoreBackendType::Memory,
        };

        let log_level = std::env::var("EARLYBIRD_LOG_LEVEL").unwrap_or_else(|_| "info".to_owned());

        // Notifications are enabled by the presence of the function URL.
        let notify = std::env::var("EARLYBIRD_NOTIFY_URL").ok().map(|function_url| {
            let timeout_secs = std::env::var("EARLYBIRD_NOTIFY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_NOTIFY_TIMEOUT_SECS);

            NotifyConfig {
                function_url,
                bearer_token: std::env::var("EARLYBIRD_NOTIFY_TOKEN").ok(),
                timeout: Duration::from_secs(timeout_secs),
            }
        });

        Self {
            bind_addr,
            store_backend,
            log_level,
            notify,
        }
    }
}
