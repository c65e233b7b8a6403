use time::PrimitiveDateTime;

use super::access::can_access_review_queue;
use super::classifier::{classify, ReviewOutcome, ReviewStatus, ReviewTab};
use super::facets::{build_facets, FacetMetadata};
use super::filters::ReviewFilters;
use super::paginator::{configuration_key, paginate, InvalidCursor, PAGE_SIZE};
use super::snapshot::{CourseSnapshot, SnapshotIndex, Submission};
use super::sorting::{sort_submissions, SortSpec};
use super::ReviewQueueError;

#[derive(Debug, Clone)]
pub(crate) struct ReviewQuery {
    pub(crate) reviewer_user_id: i64,
    pub(crate) tab: ReviewTab,
    pub(crate) filters: ReviewFilters,
    pub(crate) sort: SortSpec,
    pub(crate) cursor: u64,
    /// Configuration key returned with the page the cursor came from.
    pub(crate) config_key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum CountSummary {
    None,
    Single,
    Many,
}

impl CountSummary {
    pub(crate) fn for_total(total_count: usize) -> Self {
        match total_count {
            0 => Self::None,
            1 => Self::Single,
            _ => Self::Many,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ReviewItem {
    pub(crate) submission_id: i64,
    pub(crate) target_id: i64,
    pub(crate) target_title: String,
    pub(crate) level_id: i64,
    pub(crate) level_number: i32,
    pub(crate) level_name: String,
    pub(crate) owner_display: String,
    pub(crate) owned_by_team: bool,
    pub(crate) tab: ReviewTab,
    pub(crate) outcome: Option<ReviewOutcome>,
    pub(crate) submitted_at: PrimitiveDateTime,
    pub(crate) reviewed_at: Option<PrimitiveDateTime>,
    pub(crate) assigned_to: Option<String>,
    pub(crate) feedback_sent: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct ReviewPage {
    pub(crate) items: Vec<ReviewItem>,
    pub(crate) total_count: usize,
    pub(crate) has_more: bool,
    pub(crate) next_cursor: Option<usize>,
    pub(crate) cursor_reset: bool,
    pub(crate) config_key: String,
    pub(crate) summary: CountSummary,
    pub(crate) facets: FacetMetadata,
}

/// Runs one review queue request against a loaded snapshot.
pub(crate) fn run_query(
    snapshot: &CourseSnapshot,
    query: &ReviewQuery,
    now: PrimitiveDateTime,
) -> Result<ReviewPage, ReviewQueueError> {
    if !can_access_review_queue(snapshot, query.reviewer_user_id) {
        return Err(ReviewQueueError::AccessDenied);
    }

    query.sort.validate_for(query.tab)?;
    query.filters.validate_against(snapshot)?;

    let index = SnapshotIndex::new(snapshot, now);
    let tab_set = snapshot
        .submissions
        .iter()
        .filter(|submission| index.target(submission.target_id).is_some())
        .filter(|submission| query.tab.includes(classify(submission)))
        .collect::<Vec<_>>();

    let mut ordered = tab_set
        .iter()
        .copied()
        .filter(|submission| query.filters.matches(submission, &index))
        .collect::<Vec<_>>();
    sort_submissions(&mut ordered, query.sort);

    let config_key =
        configuration_key(snapshot.course.id, query.tab, &query.filters, query.sort);
    let same_configuration =
        query.config_key.as_deref().map_or(true, |previous| previous == config_key);
    let page = paginate(ordered, PAGE_SIZE, query.cursor, same_configuration);

    if let Some(reason) = page.invalid_cursor {
        match reason {
            InvalidCursor::BeyondTotal { cursor, total_count } => tracing::warn!(
                course_id = snapshot.course.id,
                cursor,
                total_count,
                "Cursor beyond result set; serving first page"
            ),
            InvalidCursor::StaleConfiguration { cursor } => tracing::warn!(
                course_id = snapshot.course.id,
                cursor,
                "Cursor issued for another configuration; serving first page"
            ),
        }
    }

    let reviewer_coach_id = snapshot.coach_for_user(query.reviewer_user_id).map(|coach| coach.id);
    let facets = build_facets(&tab_set, &query.filters, &index, reviewer_coach_id);

    let next_cursor = page.next_cursor();
    let items = page
        .items
        .iter()
        .filter_map(|submission| review_item(submission, &index, query.tab))
        .collect::<Vec<_>>();

    tracing::debug!(
        course_id = snapshot.course.id,
        tab = query.tab.as_str(),
        total_count = page.total_count,
        returned = items.len(),
        "Review queue page computed"
    );

    Ok(ReviewPage {
        items,
        total_count: page.total_count,
        has_more: page.has_more,
        next_cursor,
        cursor_reset: page.invalid_cursor.is_some(),
        config_key,
        summary: CountSummary::for_total(page.total_count),
        facets,
    })
}

fn review_item(
    submission: &Submission,
    index: &SnapshotIndex<'_>,
    tab: ReviewTab,
) -> Option<ReviewItem> {
    let target = index.target(submission.target_id)?;
    let level = index.level(target.level_id)?;
    let (owner_display, owned_by_team) = index.owner_display(submission);
    let status: ReviewStatus = classify(submission);

    Some(ReviewItem {
        submission_id: submission.id,
        target_id: target.id,
        target_title: target.title.clone(),
        level_id: level.id,
        level_number: level.number,
        level_name: level.name.clone(),
        owner_display,
        owned_by_team,
        tab,
        outcome: status.outcome(),
        submitted_at: submission.created_at,
        reviewed_at: submission.evaluated_at,
        assigned_to: submission
            .reviewer
            .and_then(|assignment| index.coach(assignment.coach_id))
            .map(|coach| coach.name.clone()),
        feedback_sent: submission.feedback_count > 0,
    })
}
