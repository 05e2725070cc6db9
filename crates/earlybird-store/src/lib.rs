//! Lead persistence for `earlybird`.
//!
//! This crate defines the [`LeadStore`] trait — the narrow persistence
//! surface the signup flow needs: insert one lead and return the stored
//! row, and count all leads. It knows nothing about sanitization,
//! notifications, or HTTP.
//!
//! Two implementations are provided:
//!
//! - [`PostgresStore`] — production default, backed by `PostgreSQL` (feature `postgres-backend`)
//! - [`MemoryStore`] — in-memory, for testing and local development

mod error;
mod memory;
#[cfg(feature = "postgres-backend")]
mod postgres_backend;

pub use error::StoreError;
pub use memory::MemoryStore;
#[cfg(feature = "postgres-backend")]
pub use postgres_backend::PostgresStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A validated signup payload, ready to persist.
///
/// Built by the signup workflow after sanitization and validation. An
/// industry the visitor left blank is `None` — never an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub industry: Option<String>,
}

/// A stored lead record.
///
/// `id` and `created_at` are assigned by the store. Leads are never
/// mutated or deleted by this system.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "postgres-backend", derive(sqlx::FromRow))]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub industry: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A pluggable lead store.
///
/// Implementations must be safe to share across async tasks (`Send + Sync`).
#[async_trait::async_trait]
pub trait LeadStore: Send + Sync + 'static {
    /// Insert a lead and return the stored row, with store-assigned `id`
    /// and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Insert`] if the underlying backend fails.
    async fn insert(&self, lead: NewLead) -> Result<Lead, StoreError>;

    /// Count all stored leads. No row data is fetched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Count`] if the underlying backend fails.
    async fn count(&self) -> Result<u64, StoreError>;
}
