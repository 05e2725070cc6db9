//! PostgreSQL lead store.
//!
//! Stores leads in a single `leads` table; `id` and `created_at` are
//! assigned by column defaults. Feature-gated behind `postgres-backend`.
//! Uses `sqlx` with the Tokio runtime — all operations are fully async,
//! all queries parameterized.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::{Lead, LeadStore, NewLead, StoreError};

/// A lead store backed by PostgreSQL.
///
/// Thread-safe via `PgPool`.
///
/// # Examples
///
/// ```no_run
/// # use earlybird_store::PostgresStore;
/// # #[tokio::main]
/// # async fn main() {
/// let store = PostgresStore::connect("postgres://localhost/earlybird").await.unwrap();
/// # }
/// ```
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl std::fmt::Debug for PostgresStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresStore")
            .field("pool", &"[PgPool]")
            .finish_non_exhaustive()
    }
}

impl PostgresStore {
    /// Connect to PostgreSQL and run the initial migration.
    ///
    /// Creates the `leads` table if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Open`] if the connection or migration fails.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(|e| StoreError::Open {
                target: database_url.to_owned(),
                reason: e.to_string(),
            })?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS leads (\
                id         UUID        PRIMARY KEY DEFAULT gen_random_uuid(), \
                name       TEXT        NOT NULL, \
                email      TEXT        NOT NULL, \
                industry   TEXT, \
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()\
            )",
        )
        .execute(&pool)
        .await
        .map_err(|e| StoreError::Open {
            target: database_url.to_owned(),
            reason: format!("migration failed: {e}"),
        })?;

        tracing::debug!("leads table ready");

        Ok(Self { pool })
    }

    /// Return a reference to the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl LeadStore for PostgresStore {
    async fn insert(&self, lead: NewLead) -> Result<Lead, StoreError> {
        let stored = sqlx::query_as::<_, Lead>(
            r"INSERT INTO leads (name, email, industry)
              VALUES ($1, $2, $3)
              RETURNING *",
        )
        .bind(&lead.name)
        .bind(&lead.email)
        .bind(&lead.industry)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Insert {
            reason: e.to_string(),
        })?;

        Ok(stored)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM leads")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::Count {
                reason: e.to_string(),
            })?;

        Ok(u64::try_from(count).unwrap_or(0))
    }
}
