use serde::Serialize;

use crate::api::pagination::CursorPaginatedResponse;
use crate::core::time::format_primitive;
use crate::services::review_queue::{
    CountSummary, FacetMetadata, ReviewItem, ReviewOutcome, ReviewPage, ReviewTab,
};

#[derive(Debug, Serialize)]
pub(crate) struct ReviewItemResponse {
    pub(crate) submission_id: i64,
    pub(crate) target_id: i64,
    pub(crate) target_title: String,
    pub(crate) level_id: i64,
    pub(crate) level_number: i32,
    pub(crate) level_name: String,
    pub(crate) owner_display: String,
    pub(crate) owned_by_team: bool,
    pub(crate) status: ReviewTab,
    pub(crate) submitted_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) reviewed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) outcome: Option<ReviewOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) assigned_to: Option<String>,
    pub(crate) feedback_sent: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReviewPageResponse {
    #[serde(flatten)]
    pub(crate) page: CursorPaginatedResponse<ReviewItemResponse>,
    pub(crate) summary: CountSummary,
    pub(crate) facets: FacetMetadata,
}

impl From<ReviewItem> for ReviewItemResponse {
    fn from(item: ReviewItem) -> Self {
        Self {
            submission_id: item.submission_id,
            target_id: item.target_id,
            target_title: item.target_title,
            level_id: item.level_id,
            level_number: item.level_number,
            level_name: item.level_name,
            owner_display: item.owner_display,
            owned_by_team: item.owned_by_team,
            status: item.tab,
            submitted_at: format_primitive(item.submitted_at),
            reviewed_at: item.reviewed_at.map(format_primitive),
            outcome: item.outcome,
            assigned_to: item.assigned_to,
            feedback_sent: item.feedback_sent,
        }
    }
}

impl From<ReviewPage> for ReviewPageResponse {
    fn from(page: ReviewPage) -> Self {
        Self {
            page: CursorPaginatedResponse {
                items: page.items.into_iter().map(ReviewItemResponse::from).collect(),
                total_count: page.total_count,
                has_more: page.has_more,
                next_cursor: page.next_cursor,
                cursor_reset: page.cursor_reset,
                config_key: page.config_key,
            },
            summary: page.summary,
            facets: page.facets,
        }
    }
}
