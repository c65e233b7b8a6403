use crate::db::models::{FeedbackCount, SubmissionOwner, SubmissionRow};

use super::Tx;

const COLUMNS: &str = "s.id, s.target_id, s.created_at, s.reviewer_id, s.reviewer_assigned_at, \
     s.evaluator_id, s.evaluated_at, s.passed_at, s.latest";

const COURSE_SCOPE: &str = "JOIN targets tg ON tg.id = s.target_id
     JOIN levels l ON l.id = tg.level_id
     WHERE l.course_id = $1";

/// Every submission of the course. Superseded rows are loaded too; the classifier drops them.
pub(crate) async fn list_for_course(
    tx: &mut Tx<'_>,
    course_id: i64,
) -> Result<Vec<SubmissionRow>, sqlx::Error> {
    sqlx::query_as::<_, SubmissionRow>(&format!(
        "SELECT {COLUMNS}
         FROM submissions s
         {COURSE_SCOPE}
         ORDER BY s.id"
    ))
    .bind(course_id)
    .fetch_all(&mut **tx)
    .await
}

pub(crate) async fn list_owners(
    tx: &mut Tx<'_>,
    course_id: i64,
) -> Result<Vec<SubmissionOwner>, sqlx::Error> {
    sqlx::query_as::<_, SubmissionOwner>(&format!(
        "SELECT o.submission_id, o.student_id
         FROM submission_owners o
         JOIN submissions s ON s.id = o.submission_id
         {COURSE_SCOPE}
         ORDER BY o.submission_id, o.student_id"
    ))
    .bind(course_id)
    .fetch_all(&mut **tx)
    .await
}

pub(crate) async fn list_feedback_counts(
    tx: &mut Tx<'_>,
    course_id: i64,
) -> Result<Vec<FeedbackCount>, sqlx::Error> {
    sqlx::query_as::<_, FeedbackCount>(&format!(
        "SELECT f.submission_id, COUNT(*) AS feedback_count
         FROM submission_feedback f
         JOIN submissions s ON s.id = f.submission_id
         {COURSE_SCOPE}
         GROUP BY f.submission_id"
    ))
    .bind(course_id)
    .fetch_all(&mut **tx)
    .await
}
