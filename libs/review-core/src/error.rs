//! Error types for review-core.

use thiserror::Error;

/// Result type alias using ScheduleError.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors raised before a grade reaches the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("invalid grade {0}: expected a value between 0 and 5")]
    InvalidGrade(i64),
}
