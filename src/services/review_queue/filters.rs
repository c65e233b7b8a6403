use serde::Serialize;

use super::snapshot::{CourseSnapshot, SnapshotIndex, Submission};
use super::ReviewQueueError;

/// A filter dimension that offers selectable options. Search text is a plain predicate
/// and narrows every facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Facet {
    Level,
    Target,
    PersonalCoach,
    AssignedTo,
    ReviewedBy,
}

impl Facet {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::Target => "target",
            Self::PersonalCoach => "personal_coach",
            Self::AssignedTo => "assigned_to",
            Self::ReviewedBy => "reviewed_by",
        }
    }
}

/// Active filters for a review queue request. Every populated field is ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub(crate) struct ReviewFilters {
    pub(crate) level_id: Option<i64>,
    pub(crate) target_id: Option<i64>,
    pub(crate) search_text: Option<String>,
    pub(crate) personal_coach_id: Option<i64>,
    pub(crate) assigned_to_id: Option<i64>,
    pub(crate) reviewed_by_id: Option<i64>,
    pub(crate) include_inactive: bool,
}

impl ReviewFilters {
    /// Trims the search text and drops it when nothing is left.
    pub(crate) fn normalized(mut self) -> Self {
        self.search_text = self
            .search_text
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());
        self
    }

    /// Same filters with one facet cleared.
    pub(crate) fn without(&self, facet: Facet) -> Self {
        let mut filters = self.clone();
        match facet {
            Facet::Level => filters.level_id = None,
            Facet::Target => filters.target_id = None,
            Facet::PersonalCoach => filters.personal_coach_id = None,
            Facet::AssignedTo => filters.assigned_to_id = None,
            Facet::ReviewedBy => filters.reviewed_by_id = None,
        }
        filters
    }

    /// Rejects selections that point outside the course.
    pub(crate) fn validate_against(&self, snapshot: &CourseSnapshot) -> Result<(), ReviewQueueError> {
        if let Some(id) = self.level_id {
            if !snapshot.levels.iter().any(|level| level.id == id) {
                return Err(ReviewQueueError::InvalidFacetValue { facet: Facet::Level, id });
            }
        }

        if let Some(id) = self.target_id {
            if !snapshot.targets.iter().any(|target| target.id == id) {
                return Err(ReviewQueueError::InvalidFacetValue { facet: Facet::Target, id });
            }
        }

        for (facet, selection) in [
            (Facet::PersonalCoach, self.personal_coach_id),
            (Facet::AssignedTo, self.assigned_to_id),
            (Facet::ReviewedBy, self.reviewed_by_id),
        ] {
            if let Some(id) = selection {
                if !snapshot.coaches.iter().any(|coach| coach.id == id) {
                    return Err(ReviewQueueError::InvalidFacetValue { facet, id });
                }
            }
        }

        Ok(())
    }

    pub(crate) fn matches(&self, submission: &Submission, index: &SnapshotIndex<'_>) -> bool {
        if let Some(level_id) = self.level_id {
            if index.target(submission.target_id).map(|target| target.level_id) != Some(level_id) {
                return false;
            }
        }

        if let Some(target_id) = self.target_id {
            if submission.target_id != target_id {
                return false;
            }
        }

        if let Some(text) = &self.search_text {
            if !matches_search(submission, index, text) {
                return false;
            }
        }

        if let Some(coach_id) = self.personal_coach_id {
            let teams = index.owner_team_ids(submission);
            if !teams.iter().any(|team_id| index.coach_has_team(coach_id, *team_id)) {
                return false;
            }
        }

        if let Some(coach_id) = self.assigned_to_id {
            if submission.reviewer.map(|assignment| assignment.coach_id) != Some(coach_id) {
                return false;
            }
        }

        if let Some(coach_id) = self.reviewed_by_id {
            if submission.evaluator_id != Some(coach_id) {
                return false;
            }
        }

        self.include_inactive || !index.owners_inactive(submission)
    }
}

fn matches_search(submission: &Submission, index: &SnapshotIndex<'_>, text: &str) -> bool {
    let needle = text.to_lowercase();
    index.owners(submission).any(|student| {
        student.name.to_lowercase().contains(&needle) || student.email.to_lowercase().contains(&needle)
    })
}
