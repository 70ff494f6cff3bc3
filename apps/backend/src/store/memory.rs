//! In-process record store, used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use review_core::{DueCard, ReviewRecord};
use tokio::sync::RwLock;

use super::{Result, ReviewRecordStore};

type Key = (String, String);

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<Key, ReviewRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records across all users.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ReviewRecordStore for MemoryStore {
    async fn get(&self, user_id: &str, card_id: &str) -> Result<Option<ReviewRecord>> {
        let key = (user_id.to_string(), card_id.to_string());
        Ok(self.records.read().await.get(&key).cloned())
    }

    async fn upsert(&self, user_id: &str, card_id: &str, record: &ReviewRecord) -> Result<()> {
        let key = (user_id.to_string(), card_id.to_string());
        self.records.write().await.insert(key, record.clone());
        Ok(())
    }

    async fn query_due(&self, user_id: &str, now: DateTime<Utc>) -> Result<Vec<DueCard>> {
        let records = self.records.read().await;

        let mut due: Vec<DueCard> = records
            .iter()
            .filter(|((user, _), record)| user == user_id && record.is_due(now))
            .map(|((_, card_id), record)| DueCard {
                card_id: card_id.clone(),
                record: record.clone(),
            })
            .collect();

        due.sort_by(|a, b| {
            a.record
                .due_date
                .cmp(&b.record.due_date)
                .then_with(|| a.card_id.cmp(&b.card_id))
        });

        Ok(due)
    }
}
