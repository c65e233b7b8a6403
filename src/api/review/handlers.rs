use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::guards::CurrentReviewer;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::schemas::review::ReviewPageResponse;
use crate::services::review_queue::{self, ReviewQueueError};

use super::queries::ReviewQueueQuery;

/// Same body for a missing course, a course the caller may not review, and an unavailable
/// tab/sort pairing, so none of them reveals whether the course exists.
const NOT_FOUND_DETAIL: &str = "Course not found";

pub(super) async fn review_queue(
    Path(course_id): Path<String>,
    CurrentReviewer(reviewer_id): CurrentReviewer,
    State(state): State<AppState>,
    params: Result<Query<ReviewQueueQuery>, QueryRejection>,
) -> Result<Json<ReviewPageResponse>, ApiError> {
    let course_id: i64 =
        course_id.parse().map_err(|_| ApiError::NotFound(NOT_FOUND_DETAIL.to_string()))?;

    let Query(params) = params.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    params.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let query = params.into_review_query(reviewer_id);

    let timeout = state.settings().query_timeout();
    let result = tokio::time::timeout(
        timeout,
        review_queue::fetch_page(state.snapshots(), course_id, &query, primitive_now_utc()),
    )
    .await
    .map_err(|_| {
        tracing::warn!(course_id, timeout_secs = timeout.as_secs(), "Review queue query timed out");
        ApiError::ServiceUnavailable("Review queue query timed out".to_string())
    })?;

    let page = result.map_err(review_error)?;
    Ok(Json(ReviewPageResponse::from(page)))
}

fn review_error(err: ReviewQueueError) -> ApiError {
    match err {
        ReviewQueueError::AccessDenied
        | ReviewQueueError::CourseNotFound
        | ReviewQueueError::InvalidSortCombination => {
            tracing::debug!(reason = %err, "Review queue request answered with not found");
            ApiError::NotFound(NOT_FOUND_DETAIL.to_string())
        }
        ReviewQueueError::InvalidFacetValue { .. } => ApiError::BadRequest(err.to_string()),
        ReviewQueueError::Snapshot(source) => {
            ApiError::internal(source, "Failed to load review snapshot")
        }
    }
}
