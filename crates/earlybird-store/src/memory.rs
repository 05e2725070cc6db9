//! In-memory lead store for testing and local development.
//!
//! Leads live in a `Vec` behind a `RwLock`. Nothing is persistent — all
//! data is lost when the process exits. `id` and `created_at` are assigned
//! locally, matching what the Postgres backend's defaults would do.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{Lead, LeadStore, NewLead, StoreError};

/// An in-memory lead store.
///
/// Thread-safe and async-compatible. Clones share the same underlying
/// data.
///
/// # Examples
///
/// ```
/// # use earlybird_store::{LeadStore, MemoryStore, NewLead};
/// # #[tokio::main]
/// # async fn main() {
/// let store = MemoryStore::new();
/// let lead = store
///     .insert(NewLead {
///         name: "Ada Lovelace".to_owned(),
///         email: "ada@example.com".to_owned(),
///         industry: None,
///     })
///     .await
///     .unwrap();
/// assert_eq!(lead.name, "Ada Lovelace");
/// assert_eq!(store.count().await.unwrap(), 1);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    leads: Arc<RwLock<Vec<Lead>>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            leads: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait::async_trait]
impl LeadStore for MemoryStore {
    async fn insert(&self, lead: NewLead) -> Result<Lead, StoreError> {
        let stored = Lead {
            id: Uuid::new_v4(),
            name: lead.name,
            email: lead.email,
            industry: lead.industry,
            created_at: Utc::now(),
        };
        let mut leads = self.leads.write().await;
        leads.push(stored.clone());
        Ok(stored)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let leads = self.leads.read().await;
        Ok(leads.len() as u64)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn new_lead(name: &str, email: &str, industry: Option<&str>) -> NewLead {
        NewLead {
            name: name.to_owned(),
            email: email.to_owned(),
            industry: industry.map(str::to_owned),
        }
    }

    #[tokio::test]
    async fn empty_store_counts_zero() {
        let store = MemoryStore::new();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn insert_returns_stored_row() {
        let store = MemoryStore::new();
        let lead = store
            .insert(new_lead("Ada Lovelace", "ada@example.com", Some("Technology")))
            .await
            .unwrap();
        assert_eq!(lead.name, "Ada Lovelace");
        assert_eq!(lead.email, "ada@example.com");
        assert_eq!(lead.industry.as_deref(), Some("Technology"));
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let store = MemoryStore::new();
        let a = store.insert(new_lead("A", "a@example.com", None)).await.unwrap();
        let b = store.insert(new_lead("B", "b@example.com", None)).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn absent_industry_stays_absent() {
        let store = MemoryStore::new();
        let lead = store.insert(new_lead("Ada", "ada@example.com", None)).await.unwrap();
        assert_eq!(lead.industry, None);
    }

    #[tokio::test]
    async fn count_tracks_inserts() {
        let store = MemoryStore::new();
        for i in 0..3 {
            store
                .insert(new_lead("Someone", &format!("user{i}@example.com"), None))
                .await
                .unwrap();
        }
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn clone_shares_state() {
        let store = MemoryStore::new();
        let clone = store.clone();
        store.insert(new_lead("Ada", "ada@example.com", None)).await.unwrap();
        assert_eq!(clone.count().await.unwrap(), 1);
    }
}
