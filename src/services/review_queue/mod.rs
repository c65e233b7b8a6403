//! Submission review queue: who may see a course's queue, which submissions belong on each
//! tab, how they are filtered, ordered and paged, and which facet options remain useful.
//!
//! Everything except [`SnapshotSource`] and [`source`] is pure and works on an in-memory
//! [`CourseSnapshot`].

mod access;
mod classifier;
mod facets;
mod filters;
mod paginator;
mod query;
mod snapshot;
mod sorting;
mod source;


use std::time::Instant;

use async_trait::async_trait;
use thiserror::Error;
use time::PrimitiveDateTime;

pub(crate) use classifier::{ReviewOutcome, ReviewTab};
pub(crate) use facets::FacetMetadata;
pub(crate) use filters::{Facet, ReviewFilters};
pub(crate) use query::{run_query, CountSummary, ReviewItem, ReviewPage, ReviewQuery};
pub(crate) use snapshot::CourseSnapshot;
pub(crate) use sorting::{SortDirection, SortKey, SortSpec};
pub(crate) use source::PgSnapshotSource;

#[cfg(test)]
pub(crate) use paginator::PAGE_SIZE;
#[cfg(test)]
pub(crate) use snapshot::{ReviewerAssignment, Submission};

#[derive(Debug, Error)]
pub(crate) enum ReviewQueueError {
    #[error("reviewer has no access to this course")]
    AccessDenied,
    #[error("course not found")]
    CourseNotFound,
    #[error("reviewed_at ordering is only available on the reviewed tab")]
    InvalidSortCombination,
    #[error("{} {id} does not belong to this course", facet.as_str())]
    InvalidFacetValue { facet: Facet, id: i64 },
    #[error("snapshot load failed: {0}")]
    Snapshot(#[from] sqlx::Error),
}

impl ReviewQueueError {
    fn outcome_label(&self) -> &'static str {
        match self {
            Self::AccessDenied | Self::CourseNotFound | Self::InvalidSortCombination => {
                "not_found"
            }
            Self::InvalidFacetValue { .. } => "invalid_request",
            Self::Snapshot(_) => "error",
        }
    }
}

/// Loads the read-only data a review queue request works on.
#[async_trait]
pub(crate) trait SnapshotSource: Send + Sync {
    /// `Ok(None)` when the course does not exist.
    async fn load(&self, course_id: i64) -> Result<Option<CourseSnapshot>, sqlx::Error>;
}

/// Loads the course snapshot once and answers `query` from it.
pub(crate) async fn fetch_page(
    source: &dyn SnapshotSource,
    course_id: i64,
    query: &ReviewQuery,
    now: PrimitiveDateTime,
) -> Result<ReviewPage, ReviewQueueError> {
    let started = Instant::now();
    let tab = query.tab.as_str();

    let result = match source.load(course_id).await {
        Ok(Some(snapshot)) => run_query(&snapshot, query, now),
        Ok(None) => Err(ReviewQueueError::CourseNotFound),
        Err(err) => Err(ReviewQueueError::Snapshot(err)),
    };

    let outcome = match &result {
        Ok(_) => "ok",
        Err(err) => err.outcome_label(),
    };
    metrics::counter!("review_queue_queries_total", "tab" => tab, "outcome" => outcome)
        .increment(1);
    metrics::histogram!("review_queue_query_duration_seconds", "tab" => tab)
        .record(started.elapsed().as_secs_f64());

    result
}
