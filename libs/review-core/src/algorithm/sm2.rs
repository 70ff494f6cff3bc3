//! SM-2 spaced repetition algorithm.
//!
//! Based on SuperMemo 2: two fixed bootstrap intervals, then geometric
//! growth scaled by a per-card ease factor. Any failing grade resets the
//! streak.

use crate::types::{Grade, SchedulingState};

/// SM-2 algorithm with configurable parameters.
#[derive(Debug, Clone)]
pub struct Sm2 {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    /// Interval after the first passing answer.
    pub first_interval: u32,
    /// Interval after the second consecutive passing answer.
    pub second_interval: u32,
    /// Interval after a failing answer.
    pub lapse_interval: u32,
    /// Upper bound on any interval, in days.
    pub maximum_interval: u32,
}

impl Default for Sm2 {
    fn default() -> Self {
        Self {
            initial_ease: 2.5,
            minimum_ease: 1.3,
            first_interval: 1,
            second_interval: 6,
            lapse_interval: 1,
            maximum_interval: 36_500,
        }
    }
}

impl Sm2 {
    /// State for a card that has never been graded.
    pub fn initial_state(&self) -> SchedulingState {
        SchedulingState {
            interval: 0,
            repetitions: 0,
            ease_factor: self.initial_ease,
        }
    }

    /// Calculate the next state after a review.
    ///
    /// The interval grows with the ease factor the card had *before* this
    /// review; the ease factor is then adjusted for every grade.
    pub fn compute_next(&self, current: &SchedulingState, grade: Grade) -> SchedulingState {
        let (interval, repetitions) = if grade.is_passing() {
            let interval = match current.repetitions {
                0 => self.first_interval,
                1 => self.second_interval,
                _ => (f64::from(current.interval) * current.ease_factor)
                    .round()
                    .min(f64::from(self.maximum_interval)) as u32,
            };
            (
                interval.clamp(1, self.maximum_interval.max(1)),
                current.repetitions.saturating_add(1),
            )
        } else {
            (self.lapse_interval, 0)
        };

        SchedulingState {
            interval,
            repetitions,
            ease_factor: self.next_ease(current.ease_factor, grade),
        }
    }

    fn next_ease(&self, ease: f64, grade: Grade) -> f64 {
        let miss = f64::from(5 - grade.value());
        let ease = ease + (0.1 - miss * (0.08 + miss * 0.02));
        ease.max(self.minimum_ease)
    }
}
