//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::store::StoreError;

// Re-export shared types from review-core
pub use review_core::{DueCard, Grade, ReviewRecord, SchedulingState};

// === Database Entity Types ===

/// Review record row in PostgreSQL
#[derive(Debug, Clone, FromRow)]
pub struct DbReviewRecord {
    pub card_id: String,
    pub interval_days: i32,
    pub repetitions: i32,
    pub ease_factor: f64,
    pub due_date: DateTime<Utc>,
    pub last_reviewed_at: DateTime<Utc>,
}

impl DbReviewRecord {
    /// Create from review-core ReviewRecord
    pub fn from_record(card_id: &str, record: &ReviewRecord) -> Result<Self, StoreError> {
        Ok(Self {
            card_id: card_id.to_string(),
            interval_days: to_column(card_id, "interval_days", record.state.interval)?,
            repetitions: to_column(card_id, "repetitions", record.state.repetitions)?,
            ease_factor: record.state.ease_factor,
            due_date: record.due_date,
            last_reviewed_at: record.last_reviewed_at,
        })
    }

    /// Convert to review-core ReviewRecord
    pub fn to_record(&self) -> Result<ReviewRecord, StoreError> {
        Ok(ReviewRecord {
            state: SchedulingState {
                interval: from_column(&self.card_id, "interval_days", self.interval_days)?,
                repetitions: from_column(&self.card_id, "repetitions", self.repetitions)?,
                ease_factor: self.ease_factor,
            },
            due_date: self.due_date,
            last_reviewed_at: self.last_reviewed_at,
        })
    }

    pub fn to_due_card(&self) -> Result<DueCard, StoreError> {
        Ok(DueCard {
            card_id: self.card_id.clone(),
            record: self.to_record()?,
        })
    }
}

fn to_column(card_id: &str, column: &str, value: u32) -> Result<i32, StoreError> {
    i32::try_from(value).map_err(|_| {
        StoreError::InvalidRecord(format!("card {card_id}: {column} {value} out of range"))
    })
}

fn from_column(card_id: &str, column: &str, value: i32) -> Result<u32, StoreError> {
    u32::try_from(value).map_err(|_| {
        StoreError::InvalidRecord(format!("card {card_id}: negative {column} {value}"))
    })
}

// === API Request/Response Types ===

/// Grade submission. Exactly one of `grade` or `correct` must be set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReviewRequest {
    pub user_id: String,
    pub card_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct: Option<bool>,
}

/// Stored record for one card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub card_id: String,
    pub record: ReviewRecord,
}

/// Query parameters for the due queue
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DueQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DueCardsResponse {
    pub cards: Vec<DueCard>,
    pub count: usize,
}
