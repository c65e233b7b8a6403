use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::models::SubmissionRow;
use crate::repositories;

use super::snapshot::{CourseSnapshot, ReviewerAssignment, Submission};
use super::SnapshotSource;

/// Reads a course snapshot from Postgres inside one read-only repeatable-read transaction.
#[derive(Clone)]
pub(crate) struct PgSnapshotSource {
    pool: PgPool,
}

impl PgSnapshotSource {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SnapshotSource for PgSnapshotSource {
    async fn load(&self, course_id: i64) -> Result<Option<CourseSnapshot>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let Some(course) = repositories::courses::find_by_id(&mut tx, course_id).await? else {
            tx.rollback().await?;
            return Ok(None);
        };

        let levels = repositories::curriculum::list_levels(&mut tx, course_id).await?;
        let targets = repositories::curriculum::list_targets(&mut tx, course_id).await?;
        let teams = repositories::teams::list_for_course(&mut tx, course_id).await?;
        let students = repositories::teams::list_students(&mut tx, course_id).await?;
        let coaches = repositories::coaches::list_for_course(&mut tx, course_id).await?;
        let course_enrollments =
            repositories::coaches::list_course_enrollments(&mut tx, course_id).await?;
        let team_assignments =
            repositories::coaches::list_team_assignments(&mut tx, course_id).await?;
        let rows = repositories::submissions::list_for_course(&mut tx, course_id).await?;
        let owners = repositories::submissions::list_owners(&mut tx, course_id).await?;
        let feedback = repositories::submissions::list_feedback_counts(&mut tx, course_id).await?;

        tx.commit().await?;

        let mut owners_by_submission: HashMap<i64, Vec<i64>> = HashMap::new();
        for owner in owners {
            owners_by_submission.entry(owner.submission_id).or_default().push(owner.student_id);
        }
        let feedback_by_submission = feedback
            .into_iter()
            .map(|row| (row.submission_id, u32::try_from(row.feedback_count).unwrap_or(u32::MAX)))
            .collect::<HashMap<_, _>>();

        let submissions = rows
            .into_iter()
            .map(|row| {
                let owner_ids = owners_by_submission.remove(&row.id).unwrap_or_default();
                let feedback_count = feedback_by_submission.get(&row.id).copied().unwrap_or(0);
                submission_from_row(row, owner_ids, feedback_count)
            })
            .collect();

        tracing::debug!(
            course_id,
            levels = levels.len(),
            targets = targets.len(),
            students = students.len(),
            "Loaded review snapshot"
        );

        Ok(Some(CourseSnapshot {
            course,
            levels,
            targets,
            teams,
            students,
            coaches,
            course_enrollments,
            team_assignments,
            submissions,
        }))
    }
}

fn submission_from_row(row: SubmissionRow, owner_ids: Vec<i64>, feedback_count: u32) -> Submission {
    let reviewer = match (row.reviewer_id, row.reviewer_assigned_at) {
        (Some(coach_id), Some(assigned_at)) => Some(ReviewerAssignment { coach_id, assigned_at }),
        (Some(coach_id), None) => Some(ReviewerAssignment { coach_id, assigned_at: row.created_at }),
        _ => None,
    };

    Submission {
        id: row.id,
        target_id: row.target_id,
        owner_ids,
        created_at: row.created_at,
        reviewer,
        evaluator_id: row.evaluator_id,
        evaluated_at: row.evaluated_at,
        passed_at: row.passed_at,
        latest: row.latest,
        feedback_count,
    }
}
