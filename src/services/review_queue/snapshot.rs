use std::collections::{HashMap, HashSet};

use time::PrimitiveDateTime;

use crate::db::models::{Coach, Course, Level, Student, Target, Team, TeamAssignment};
use crate::db::types::SubmissionMode;

/// Read-only view of everything the review queue needs for one course.
#[derive(Debug, Clone)]
pub(crate) struct CourseSnapshot {
    pub(crate) course: Course,
    pub(crate) levels: Vec<Level>,
    pub(crate) targets: Vec<Target>,
    pub(crate) teams: Vec<Team>,
    pub(crate) students: Vec<Student>,
    pub(crate) coaches: Vec<Coach>,
    /// Coach ids holding a course-level enrollment.
    pub(crate) course_enrollments: Vec<i64>,
    pub(crate) team_assignments: Vec<TeamAssignment>,
    pub(crate) submissions: Vec<Submission>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ReviewerAssignment {
    pub(crate) coach_id: i64,
    pub(crate) assigned_at: PrimitiveDateTime,
}

#[derive(Debug, Clone)]
pub(crate) struct Submission {
    pub(crate) id: i64,
    pub(crate) target_id: i64,
    /// Student ids acting jointly on this submission.
    pub(crate) owner_ids: Vec<i64>,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) reviewer: Option<ReviewerAssignment>,
    pub(crate) evaluator_id: Option<i64>,
    pub(crate) evaluated_at: Option<PrimitiveDateTime>,
    pub(crate) passed_at: Option<PrimitiveDateTime>,
    pub(crate) latest: bool,
    pub(crate) feedback_count: u32,
}

impl CourseSnapshot {
    pub(crate) fn coach_for_user(&self, user_id: i64) -> Option<&Coach> {
        self.coaches.iter().find(|coach| coach.user_id == user_id)
    }
}

/// Lookup tables derived from a snapshot, built once per request.
pub(crate) struct SnapshotIndex<'a> {
    levels: HashMap<i64, &'a Level>,
    targets: HashMap<i64, &'a Target>,
    teams: HashMap<i64, &'a Team>,
    students: HashMap<i64, &'a Student>,
    coaches: HashMap<i64, &'a Coach>,
    teams_by_coach: HashMap<i64, HashSet<i64>>,
    inactive_teams: HashSet<i64>,
}

impl<'a> SnapshotIndex<'a> {
    pub(crate) fn new(snapshot: &'a CourseSnapshot, now: PrimitiveDateTime) -> Self {
        let mut teams_by_coach: HashMap<i64, HashSet<i64>> = HashMap::new();
        for assignment in &snapshot.team_assignments {
            teams_by_coach.entry(assignment.coach_id).or_default().insert(assignment.team_id);
        }

        let inactive_teams = snapshot
            .teams
            .iter()
            .filter(|team| team.access_ends_at.is_some_and(|ends_at| ends_at <= now))
            .map(|team| team.id)
            .collect();

        Self {
            levels: snapshot.levels.iter().map(|level| (level.id, level)).collect(),
            targets: snapshot.targets.iter().map(|target| (target.id, target)).collect(),
            teams: snapshot.teams.iter().map(|team| (team.id, team)).collect(),
            students: snapshot.students.iter().map(|student| (student.id, student)).collect(),
            coaches: snapshot.coaches.iter().map(|coach| (coach.id, coach)).collect(),
            teams_by_coach,
            inactive_teams,
        }
    }

    pub(crate) fn level(&self, id: i64) -> Option<&'a Level> {
        self.levels.get(&id).copied()
    }

    pub(crate) fn target(&self, id: i64) -> Option<&'a Target> {
        self.targets.get(&id).copied()
    }

    pub(crate) fn team(&self, id: i64) -> Option<&'a Team> {
        self.teams.get(&id).copied()
    }

    pub(crate) fn coach(&self, id: i64) -> Option<&'a Coach> {
        self.coaches.get(&id).copied()
    }

    pub(crate) fn level_of(&self, submission: &Submission) -> Option<&'a Level> {
        self.target(submission.target_id).and_then(|target| self.level(target.level_id))
    }

    pub(crate) fn owners<'s>(
        &'s self,
        submission: &'s Submission,
    ) -> impl Iterator<Item = &'a Student> + 's {
        submission.owner_ids.iter().filter_map(|id| self.students.get(id).copied())
    }

    pub(crate) fn owner_team_ids(&self, submission: &Submission) -> HashSet<i64> {
        self.owners(submission).map(|student| student.team_id).collect()
    }

    pub(crate) fn coach_has_team(&self, coach_id: i64, team_id: i64) -> bool {
        self.teams_by_coach.get(&coach_id).is_some_and(|teams| teams.contains(&team_id))
    }

    /// Coaches directly assigned to any owner's team.
    pub(crate) fn personal_coaches_of(&self, submission: &Submission) -> Vec<i64> {
        let team_ids = self.owner_team_ids(submission);
        let mut coach_ids = self
            .teams_by_coach
            .iter()
            .filter(|(_, teams)| !teams.is_disjoint(&team_ids))
            .map(|(coach_id, _)| *coach_id)
            .collect::<Vec<_>>();
        coach_ids.sort_unstable();
        coach_ids
    }

    /// True when every owner of the submission belongs to a team whose access has ended.
    pub(crate) fn owners_inactive(&self, submission: &Submission) -> bool {
        let mut owners = self.owners(submission).peekable();
        if owners.peek().is_none() {
            return false;
        }
        owners.all(|student| self.inactive_teams.contains(&student.team_id))
    }

    /// Team name for a jointly owned team submission, otherwise the owners' names.
    pub(crate) fn owner_display(&self, submission: &Submission) -> (String, bool) {
        let team_mode = self
            .target(submission.target_id)
            .is_some_and(|target| target.mode == SubmissionMode::Team);
        let team_ids = self.owner_team_ids(submission);

        if team_mode && submission.owner_ids.len() > 1 && team_ids.len() == 1 {
            if let Some(team) = team_ids.iter().next().and_then(|id| self.team(*id)) {
                return (team.name.clone(), true);
            }
        }

        let names = self.owners(submission).map(|student| student.name.as_str()).collect::<Vec<_>>();
        (names.join(", "), false)
    }
}
