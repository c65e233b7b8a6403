use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::classifier::ReviewTab;
use super::snapshot::Submission;
use super::ReviewQueueError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum SortKey {
    #[default]
    SubmittedAt,
    ReviewedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SortDirection {
    /// Oldest first, so the longest-waiting work surfaces at the top.
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub(crate) struct SortSpec {
    pub(crate) key: SortKey,
    pub(crate) direction: SortDirection,
}

impl SortDirection {
    pub(crate) fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl SortSpec {
    /// Switches the key and keeps the current direction.
    pub(crate) fn with_key(self, key: SortKey) -> Self {
        Self { key, ..self }
    }

    /// Flips the direction and keeps the current key.
    pub(crate) fn toggled(self) -> Self {
        Self { direction: self.direction.reversed(), ..self }
    }

    pub(crate) fn validate_for(self, tab: ReviewTab) -> Result<(), ReviewQueueError> {
        match (tab, self.key) {
            (ReviewTab::Pending, SortKey::ReviewedAt) => {
                Err(ReviewQueueError::InvalidSortCombination)
            }
            _ => Ok(()),
        }
    }
}

pub(crate) fn compare(left: &Submission, right: &Submission, spec: SortSpec) -> Ordering {
    let by_key = match spec.key {
        SortKey::SubmittedAt => left.created_at.cmp(&right.created_at),
        SortKey::ReviewedAt => left.evaluated_at.cmp(&right.evaluated_at),
    };

    let by_key = match spec.direction {
        SortDirection::Asc => by_key,
        SortDirection::Desc => by_key.reverse(),
    };

    by_key.then_with(|| left.id.cmp(&right.id))
}

pub(crate) fn sort_submissions(submissions: &mut [&Submission], spec: SortSpec) {
    submissions.sort_by(|left, right| compare(left, right, spec));
}
