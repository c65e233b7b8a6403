use crate::db::models::Course;

use super::Tx;

pub(crate) async fn find_by_id(
    tx: &mut Tx<'_>,
    course_id: i64,
) -> Result<Option<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>("SELECT id, name FROM courses WHERE id = $1")
        .bind(course_id)
        .fetch_optional(&mut **tx)
        .await
}
