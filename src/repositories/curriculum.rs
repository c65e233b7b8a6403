use crate::db::models::{Level, Target};

use super::Tx;

pub(crate) async fn list_levels(tx: &mut Tx<'_>, course_id: i64) -> Result<Vec<Level>, sqlx::Error> {
    sqlx::query_as::<_, Level>(
        "SELECT id, number, name
         FROM levels
         WHERE course_id = $1
         ORDER BY number, id",
    )
    .bind(course_id)
    .fetch_all(&mut **tx)
    .await
}

pub(crate) async fn list_targets(
    tx: &mut Tx<'_>,
    course_id: i64,
) -> Result<Vec<Target>, sqlx::Error> {
    sqlx::query_as::<_, Target>(
        "SELECT t.id, t.level_id, t.title, t.submission_mode AS mode
         FROM targets t
         JOIN levels l ON l.id = t.level_id
         WHERE l.course_id = $1
         ORDER BY t.id",
    )
    .bind(course_id)
    .fetch_all(&mut **tx)
    .await
}
