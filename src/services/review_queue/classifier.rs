use serde::{Deserialize, Serialize};

use super::snapshot::Submission;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReviewStatus {
    Pending,
    ReviewedPassed,
    ReviewedRejected,
    Excluded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ReviewTab {
    #[default]
    Pending,
    Reviewed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ReviewOutcome {
    Passed,
    Rejected,
}

impl ReviewStatus {
    pub(crate) fn outcome(self) -> Option<ReviewOutcome> {
        match self {
            Self::ReviewedPassed => Some(ReviewOutcome::Passed),
            Self::ReviewedRejected => Some(ReviewOutcome::Rejected),
            Self::Pending | Self::Excluded => None,
        }
    }
}

impl ReviewTab {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
        }
    }

    pub(crate) fn includes(self, status: ReviewStatus) -> bool {
        match self {
            Self::Pending => status == ReviewStatus::Pending,
            Self::Reviewed => {
                matches!(status, ReviewStatus::ReviewedPassed | ReviewStatus::ReviewedRejected)
            }
        }
    }
}

pub(crate) fn classify(submission: &Submission) -> ReviewStatus {
    if !submission.latest {
        return ReviewStatus::Excluded;
    }

    match (submission.evaluated_at, submission.evaluator_id, submission.passed_at) {
        // Auto-verified: passed without anyone evaluating it.
        (None, None, Some(_)) => ReviewStatus::Excluded,
        (None, _, _) => ReviewStatus::Pending,
        (Some(_), _, Some(_)) => ReviewStatus::ReviewedPassed,
        (Some(_), _, None) => ReviewStatus::ReviewedRejected,
    }
}
