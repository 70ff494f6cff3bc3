//! Review orchestration: read the prior state, schedule, persist.

use std::sync::Arc;

use review_core::{DueCard, Grade, ReviewRecord, ScheduleError, Sm2};
use thiserror::Error;

use crate::clock::Clock;
use crate::store::{ReviewRecordStore, StoreError};

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error(transparent)]
    InvalidGrade(#[from] ScheduleError),

    #[error("progress was not saved: {0}")]
    StoreUnavailable(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, ReviewError>;

/// Runs one read-compute-write cycle per submitted grade.
///
/// Two concurrent submissions for the same (user, card) pair are
/// last-write-wins.
#[derive(Clone)]
pub struct ReviewService {
    store: Arc<dyn ReviewRecordStore>,
    clock: Arc<dyn Clock>,
    algorithm: Sm2,
}

impl ReviewService {
    pub fn new(store: Arc<dyn ReviewRecordStore>, clock: Arc<dyn Clock>) -> Self {
        Self::with_algorithm(store, clock, Sm2::default())
    }

    pub fn with_algorithm(
        store: Arc<dyn ReviewRecordStore>,
        clock: Arc<dyn Clock>,
        algorithm: Sm2,
    ) -> Self {
        Self {
            store,
            clock,
            algorithm,
        }
    }

    /// Grade a card and store its next review date.
    pub async fn submit_grade(
        &self,
        user_id: &str,
        card_id: &str,
        grade: Grade,
    ) -> Result<ReviewRecord> {
        let current = match self.store.get(user_id, card_id).await {
            Ok(Some(record)) => record.state,
            Ok(None) => self.algorithm.initial_state(),
            Err(e) => {
                tracing::warn!(user_id, card_id, error = %e, "Failed to load review record");
                return Err(e.into());
            }
        };

        let next = self.algorithm.compute_next(&current, grade);
        let record = ReviewRecord::scheduled(next, self.clock.now());

        if let Err(e) = self.store.upsert(user_id, card_id, &record).await {
            tracing::warn!(user_id, card_id, error = %e, "Failed to save review record");
            return Err(e.into());
        }

        tracing::debug!(
            user_id,
            card_id,
            grade = grade.value(),
            interval = record.state.interval,
            repetitions = record.state.repetitions,
            ease_factor = record.state.ease_factor,
            "Review scheduled"
        );

        Ok(record)
    }

    /// Grade with an unchecked integer, rejecting values outside 0-5
    /// before anything is read or written.
    pub async fn submit_raw_grade(
        &self,
        user_id: &str,
        card_id: &str,
        grade: i64,
    ) -> Result<ReviewRecord> {
        let grade = Grade::new(grade)?;
        self.submit_grade(user_id, card_id, grade).await
    }

    /// Grade a plain correct/incorrect answer.
    pub async fn submit_answer(
        &self,
        user_id: &str,
        card_id: &str,
        correct: bool,
    ) -> Result<ReviewRecord> {
        self.submit_grade(user_id, card_id, Grade::from_correct(correct))
            .await
    }

    /// Cards due now, oldest first, optionally capped at `limit`.
    pub async fn due_cards(&self, user_id: &str, limit: Option<usize>) -> Result<Vec<DueCard>> {
        let mut cards = self.store.query_due(user_id, self.clock.now()).await?;
        if let Some(limit) = limit {
            cards.truncate(limit);
        }
        Ok(cards)
    }

    pub async fn record(&self, user_id: &str, card_id: &str) -> Result<Option<ReviewRecord>> {
        Ok(self.store.get(user_id, card_id).await?)
    }
}
