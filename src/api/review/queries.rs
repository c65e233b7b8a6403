use serde::Deserialize;
use validator::Validate;

use crate::services::review_queue::{
    ReviewFilters, ReviewQuery, ReviewTab, SortDirection, SortKey, SortSpec,
};

/// Query string of the review endpoint. Unknown parameters are rejected.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub(super) struct ReviewQueueQuery {
    #[serde(default)]
    pub(super) tab: ReviewTab,
    #[serde(default)]
    pub(super) level_id: Option<i64>,
    #[serde(default)]
    pub(super) target_id: Option<i64>,
    #[serde(default)]
    #[validate(length(max = 200, message = "search_text must be at most 200 characters"))]
    pub(super) search_text: Option<String>,
    #[serde(default)]
    pub(super) personal_coach_id: Option<i64>,
    #[serde(default)]
    pub(super) assigned_to_id: Option<i64>,
    #[serde(default)]
    pub(super) reviewed_by_id: Option<i64>,
    #[serde(default)]
    pub(super) include_inactive: bool,
    #[serde(default)]
    pub(super) sort_key: SortKey,
    #[serde(default)]
    pub(super) sort_direction: SortDirection,
    #[serde(default)]
    pub(super) cursor: u64,
    #[serde(default)]
    #[validate(length(min = 1, max = 64, message = "config_key must be 1-64 characters"))]
    pub(super) config_key: Option<String>,
}

impl ReviewQueueQuery {
    pub(super) fn into_review_query(self, reviewer_user_id: i64) -> ReviewQuery {
        let filters = ReviewFilters {
            level_id: self.level_id,
            target_id: self.target_id,
            search_text: self.search_text,
            personal_coach_id: self.personal_coach_id,
            assigned_to_id: self.assigned_to_id,
            reviewed_by_id: self.reviewed_by_id,
            include_inactive: self.include_inactive,
        }
        .normalized();

        let mut sort = SortSpec::default().with_key(self.sort_key);
        if sort.direction != self.sort_direction {
            sort = sort.toggled();
        }

        ReviewQuery {
            reviewer_user_id,
            tab: self.tab,
            filters,
            sort,
            cursor: self.cursor,
            config_key: self.config_key,
        }
    }
}
