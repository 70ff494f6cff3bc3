//! Review endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/reviews
pub async fn submit(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SubmitReviewRequest>, JsonRejection>,
) -> Result<Json<ReviewResponse>> {
    let Json(payload) = payload?;

    if payload.user_id.trim().is_empty() || payload.card_id.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "user_id and card_id must not be empty".to_string(),
        ));
    }

    let record = match (payload.grade, payload.correct) {
        (Some(grade), None) => {
            state
                .reviews
                .submit_raw_grade(&payload.user_id, &payload.card_id, grade)
                .await?
        }
        (None, Some(correct)) => {
            state
                .reviews
                .submit_answer(&payload.user_id, &payload.card_id, correct)
                .await?
        }
        _ => {
            return Err(ApiError::BadRequest(
                "exactly one of grade or correct is required".to_string(),
            ))
        }
    };

    Ok(Json(ReviewResponse {
        card_id: payload.card_id,
        record,
    }))
}

/// GET /api/users/:user_id/due
pub async fn due(
    State(state): State<AppState>,
    user_id: std::result::Result<Path<String>, PathRejection>,
    query: std::result::Result<Query<DueQuery>, QueryRejection>,
) -> Result<Json<DueCardsResponse>> {
    let Path(user_id) = user_id?;
    let Query(query) = query?;
    let cards = state.reviews.due_cards(&user_id, query.limit).await?;
    let count = cards.len();
    Ok(Json(DueCardsResponse { cards, count }))
}

/// GET /api/users/:user_id/cards/:card_id
pub async fn get_record(
    State(state): State<AppState>,
    path: std::result::Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<ReviewResponse>> {
    let Path((user_id, card_id)) = path?;
    let record = state
        .reviews
        .record(&user_id, &card_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("No review record for card {}", card_id)))?;

    Ok(Json(ReviewResponse { card_id, record }))
}
