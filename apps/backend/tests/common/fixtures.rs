//! Test fixtures and factory functions for creating test data.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use uuid::Uuid;

/// Fixed instant the test clock starts at.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 2, 9, 0, 0).unwrap()
}

/// Create a submit review request body with a 0-5 grade.
pub fn grade_request(user_id: &str, card_id: &str, grade: i64) -> serde_json::Value {
    json!({
        "user_id": user_id,
        "card_id": card_id,
        "grade": grade
    })
}

/// Create a submit review request body with a correct/incorrect answer.
pub fn answer_request(user_id: &str, card_id: &str, correct: bool) -> serde_json::Value {
    json!({
        "user_id": user_id,
        "card_id": card_id,
        "correct": correct
    })
}

/// Generate a unique user id to avoid collisions between tests.
pub fn unique_user_id(prefix: &str) -> String {
    format!("{}_{}", prefix, &Uuid::new_v4().to_string()[..8])
}
