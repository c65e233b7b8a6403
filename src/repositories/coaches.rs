use crate::db::models::{Coach, TeamAssignment};

use super::Tx;

/// Coaches enrolled in the course, assigned to one of its teams, or named on one of its
/// submissions as reviewer or evaluator.
pub(crate) async fn list_for_course(
    tx: &mut Tx<'_>,
    course_id: i64,
) -> Result<Vec<Coach>, sqlx::Error> {
    sqlx::query_as::<_, Coach>(
        "SELECT c.id, c.user_id, u.name
         FROM coaches c
         JOIN users u ON u.id = c.user_id
         WHERE c.id IN (
             SELECT coach_id FROM coach_course_enrollments WHERE course_id = $1
             UNION
             SELECT a.coach_id
             FROM coach_team_assignments a
             JOIN teams t ON t.id = a.team_id
             WHERE t.course_id = $1
             UNION
             SELECT unnest(ARRAY[s.reviewer_id, s.evaluator_id])
             FROM submissions s
             JOIN targets tg ON tg.id = s.target_id
             JOIN levels l ON l.id = tg.level_id
             WHERE l.course_id = $1
         )
         ORDER BY c.id",
    )
    .bind(course_id)
    .fetch_all(&mut **tx)
    .await
}

pub(crate) async fn list_course_enrollments(
    tx: &mut Tx<'_>,
    course_id: i64,
) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT coach_id FROM coach_course_enrollments WHERE course_id = $1 ORDER BY coach_id",
    )
    .bind(course_id)
    .fetch_all(&mut **tx)
    .await
}

pub(crate) async fn list_team_assignments(
    tx: &mut Tx<'_>,
    course_id: i64,
) -> Result<Vec<TeamAssignment>, sqlx::Error> {
    sqlx::query_as::<_, TeamAssignment>(
        "SELECT a.coach_id, a.team_id
         FROM coach_team_assignments a
         JOIN teams t ON t.id = a.team_id
         WHERE t.course_id = $1
         ORDER BY a.coach_id, a.team_id",
    )
    .bind(course_id)
    .fetch_all(&mut **tx)
    .await
}
