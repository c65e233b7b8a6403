use super::snapshot::CourseSnapshot;

/// A reviewer may open the queue when they coach the course, either through a course-level
/// enrollment or through an assignment to at least one of its teams.
pub(crate) fn can_access_review_queue(snapshot: &CourseSnapshot, reviewer_user_id: i64) -> bool {
    let Some(coach) = snapshot.coach_for_user(reviewer_user_id) else {
        return false;
    };

    if snapshot.course_enrollments.contains(&coach.id) {
        return true;
    }

    snapshot.team_assignments.iter().any(|assignment| {
        assignment.coach_id == coach.id
            && snapshot.teams.iter().any(|team| team.id == assignment.team_id)
    })
}
