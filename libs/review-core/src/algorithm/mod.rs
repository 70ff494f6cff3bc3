//! Spaced repetition scheduling.

pub mod sm2;

use crate::types::{Grade, SchedulingState};

/// Compute the next scheduling state with the default SM-2 parameters.
pub fn compute_next(current: &SchedulingState, grade: Grade) -> SchedulingState {
    sm2::Sm2::default().compute_next(current, grade)
}
