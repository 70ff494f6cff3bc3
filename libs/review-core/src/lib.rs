//! Core review scheduling library shared by the backend and any future clients.
//!
//! Provides:
//! - SM-2 spaced repetition scheduling (pure, no I/O)
//! - Validated review grades (0-5)
//! - Shared types (SchedulingState, ReviewRecord, DueCard)

pub mod algorithm;
pub mod error;
pub mod types;

pub use algorithm::{compute_next, sm2::Sm2};
pub use error::{Result, ScheduleError};
pub use types::{DueCard, Grade, ReviewRecord, SchedulingState};
