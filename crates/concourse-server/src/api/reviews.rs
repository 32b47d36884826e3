//! Per-restaurant review handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use concourse_catalog::Review;

use crate::middleware::RequestId;

use super::restaurants::resolve_restaurant;
use super::{map_storage_error, validate_rating, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct CreateReviewRequest {
    pub author: String,
    pub rating: f32,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub(super) struct ReviewListData {
    pub reviews: Vec<Review>,
    pub average_rating: Option<f32>,
}

/// GET /api/v1/restaurants/:id/reviews — newest first, with the mean rating.
pub(super) async fn list_reviews(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<ReviewListData>>, ApiError> {
    resolve_restaurant(&state, id, &req_id.0).await?;

    let log = state.reviews.lock().await;
    Ok(Json(ApiResponse {
        data: ReviewListData {
            reviews: log.for_restaurant(id),
            average_rating: log.average_rating(id),
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// POST /api/v1/restaurants/:id/reviews — append a review.
pub(super) async fn create_review(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<u64>,
    Json(body): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Review>>), ApiError> {
    let rid = &req_id.0;

    let author = body.author.trim();
    if author.is_empty() {
        return Err(ApiError::new(
            rid,
            "validation_error",
            "author must be non-empty",
        ));
    }
    let text = body.text.trim();
    if text.is_empty() {
        return Err(ApiError::new(
            rid,
            "validation_error",
            "text must be non-empty",
        ));
    }
    validate_rating(rid, body.rating)?;
    resolve_restaurant(&state, id, rid).await?;

    let mut log = state.reviews.lock().await;
    let review = log
        .add(id, author, body.rating, text)
        .map_err(|e| map_storage_error(rid.clone(), &e))?;
    tracing::info!(restaurant_id = id, review_id = review.id, "review recorded");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: review,
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}
