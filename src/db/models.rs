use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::PrimitiveDateTime;

use crate::db::types::SubmissionMode;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Course {
    pub(crate) id: i64,
    pub(crate) name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Level {
    pub(crate) id: i64,
    pub(crate) number: i32,
    pub(crate) name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Target {
    pub(crate) id: i64,
    pub(crate) level_id: i64,
    pub(crate) title: String,
    pub(crate) mode: SubmissionMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Team {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) access_ends_at: Option<PrimitiveDateTime>,
}

/// A student joined with the display fields of their user account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Student {
    pub(crate) id: i64,
    pub(crate) team_id: i64,
    pub(crate) name: String,
    pub(crate) email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Coach {
    pub(crate) id: i64,
    pub(crate) user_id: i64,
    pub(crate) name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub(crate) struct TeamAssignment {
    pub(crate) coach_id: i64,
    pub(crate) team_id: i64,
}

#[derive(Debug, Clone, FromRow)]
pub(crate) struct SubmissionRow {
    pub(crate) id: i64,
    pub(crate) target_id: i64,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) reviewer_id: Option<i64>,
    pub(crate) reviewer_assigned_at: Option<PrimitiveDateTime>,
    pub(crate) evaluator_id: Option<i64>,
    pub(crate) evaluated_at: Option<PrimitiveDateTime>,
    pub(crate) passed_at: Option<PrimitiveDateTime>,
    pub(crate) latest: bool,
}

#[derive(Debug, Clone, Copy, FromRow)]
pub(crate) struct SubmissionOwner {
    pub(crate) submission_id: i64,
    pub(crate) student_id: i64,
}

#[derive(Debug, Clone, Copy, FromRow)]
pub(crate) struct FeedbackCount {
    pub(crate) submission_id: i64,
    pub(crate) feedback_count: i64,
}
