//! Review record persistence.
//!
//! The orchestrator only talks to [`ReviewRecordStore`]; which backend sits
//! behind it is decided at startup from configuration.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use review_core::{DueCard, ReviewRecord, SchedulingState};
use thiserror::Error;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors from the underlying record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("invalid stored record: {0}")]
    InvalidRecord(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Persistence keyed by `(user_id, card_id)`.
///
/// `upsert` must replace the whole record in one write; callers rely on
/// never observing a half-updated record.
#[async_trait]
pub trait ReviewRecordStore: Send + Sync {
    /// Fetch the record for a pair. `Ok(None)` means the card was never graded.
    async fn get(&self, user_id: &str, card_id: &str) -> Result<Option<ReviewRecord>>;

    async fn upsert(&self, user_id: &str, card_id: &str, record: &ReviewRecord) -> Result<()>;

    /// All records of `user_id` with `due_date <= now`, oldest due first.
    async fn query_due(&self, user_id: &str, now: DateTime<Utc>) -> Result<Vec<DueCard>>;

    /// Current scheduling state, or the default state for an unseen pair.
    async fn get_or_default(&self, user_id: &str, card_id: &str) -> Result<SchedulingState> {
        Ok(self
            .get(user_id, card_id)
            .await?
            .map(|record| record.state)
            .unwrap_or_default())
    }
}
