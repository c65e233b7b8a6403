mod handlers;
mod queries;

use axum::{routing::get, Router};

use crate::core::state::AppState;

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/:course_id/review", get(handlers::review_queue))
}
