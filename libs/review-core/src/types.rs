//! Core types for review scheduling.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Recall quality for one review, on the 0-5 SuperMemo scale.
///
/// 0-2 means the card was forgotten, 3-5 means it was remembered with
/// increasing confidence. A `Grade` can only hold a value in that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Grade(u8);

impl Grade {
    pub const MIN: Grade = Grade(0);
    pub const MAX: Grade = Grade(5);

    /// Lowest grade that still counts as remembered.
    pub const PASSING: Grade = Grade(3);

    /// Validate a raw grade value.
    pub fn new(value: i64) -> Result<Self> {
        if (0..=5).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ScheduleError::InvalidGrade(value))
        }
    }

    /// Map a plain correct/incorrect answer onto the 0-5 scale.
    /// Correct -> 5, incorrect -> 1
    pub fn from_correct(correct: bool) -> Self {
        if correct { Self(5) } else { Self(1) }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether this grade keeps the repetition streak alive.
    pub fn is_passing(self) -> bool {
        self >= Self::PASSING
    }
}

impl TryFrom<i64> for Grade {
    type Error = ScheduleError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

/// Scheduling state kept per (user, card) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchedulingState {
    /// Days until the card is next due.
    pub interval: u32,
    /// Consecutive passing answers since the last reset.
    pub repetitions: u32,
    pub ease_factor: f64,
}

impl Default for SchedulingState {
    fn default() -> Self {
        Self {
            interval: 0,
            repetitions: 0,
            ease_factor: 2.5,
        }
    }
}

/// Persisted review record: the scheduling state plus the timestamps
/// derived when it was last updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(flatten)]
    pub state: SchedulingState,
    pub due_date: DateTime<Utc>,
    pub last_reviewed_at: DateTime<Utc>,
}

impl ReviewRecord {
    /// Build the record for a state computed at `reviewed_at`.
    ///
    /// A due date past the representable range saturates at
    /// `DateTime::<Utc>::MAX_UTC`.
    pub fn scheduled(state: SchedulingState, reviewed_at: DateTime<Utc>) -> Self {
        let due_date = reviewed_at
            .checked_add_signed(Duration::days(i64::from(state.interval)))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            state,
            due_date,
            last_reviewed_at: reviewed_at,
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.due_date <= now
    }
}

/// A card whose review record is due.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueCard {
    pub card_id: String,
    #[serde(flatten)]
    pub record: ReviewRecord,
}
