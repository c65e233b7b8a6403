use crate::db::models::{Student, Team};

use super::Tx;

pub(crate) async fn list_for_course(
    tx: &mut Tx<'_>,
    course_id: i64,
) -> Result<Vec<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        "SELECT id, name, access_ends_at
         FROM teams
         WHERE course_id = $1
         ORDER BY id",
    )
    .bind(course_id)
    .fetch_all(&mut **tx)
    .await
}

pub(crate) async fn list_students(
    tx: &mut Tx<'_>,
    course_id: i64,
) -> Result<Vec<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(
        "SELECT s.id, s.team_id, u.name, u.email
         FROM students s
         JOIN teams t ON t.id = s.team_id
         JOIN users u ON u.id = s.user_id
         WHERE t.course_id = $1
         ORDER BY s.id",
    )
    .bind(course_id)
    .fetch_all(&mut **tx)
    .await
}
