//! A small course with three active teams, one team whose access has ended, and submissions
//! covering every classification.

use time::macros::datetime;
use time::{Duration, PrimitiveDateTime};

use crate::db::models::{Coach, Course, Level, Student, Target, Team, TeamAssignment};
use crate::db::types::SubmissionMode;
use crate::services::review_queue::{CourseSnapshot, ReviewerAssignment, Submission};

pub(crate) const COURSE_ID: i64 = 1;
pub(crate) const MISSING_COURSE_ID: i64 = 999;

pub(crate) const LEVEL_1: i64 = 11;
pub(crate) const LEVEL_2: i64 = 12;
pub(crate) const LEVEL_3: i64 = 13;

pub(crate) const TARGET_L1: i64 = 101;
pub(crate) const TARGET_L2: i64 = 102;
pub(crate) const TARGET_L3: i64 = 103;
pub(crate) const TEAM_TARGET: i64 = 104;
pub(crate) const AUTO_VERIFY_TARGET: i64 = 105;

pub(crate) const TEAM_ALPHA: i64 = 201;
pub(crate) const TEAM_BETA: i64 = 202;
pub(crate) const TEAM_GAMMA: i64 = 203;
pub(crate) const TEAM_ENDED: i64 = 204;

/// Student whose name is searched for.
pub(crate) const NAMED_STUDENT: i64 = 303;
/// Student whose email is searched for.
pub(crate) const EMAIL_STUDENT: i64 = 305;
pub(crate) const ENDED_STUDENT: i64 = 307;

pub(crate) const COURSE_COACH: i64 = 401;
pub(crate) const TEAM_COACH: i64 = 402;
pub(crate) const TEAM_ONLY_COACH: i64 = 403;

pub(crate) const COURSE_COACH_USER: i64 = 1001;
pub(crate) const TEAM_COACH_USER: i64 = 1002;
pub(crate) const TEAM_ONLY_COACH_USER: i64 = 1003;
pub(crate) const STUDENT_USER: i64 = 2001;
pub(crate) const ADMIN_USER: i64 = 3001;

pub(crate) const SUPERSEDED: i64 = 500;
pub(crate) const PASSED_BY_TEAM_COACH: i64 = 501;
pub(crate) const REJECTED_WITH_FEEDBACK: i64 = 502;
pub(crate) const REJECTED_TEAM_SUBMISSION: i64 = 503;
pub(crate) const AUTO_VERIFIED: i64 = 504;
pub(crate) const PASSED_NAMED_STUDENT: i64 = 505;
pub(crate) const PENDING_ASSIGNED: i64 = 506;
pub(crate) const PENDING_NAMED_STUDENT: i64 = 507;
pub(crate) const PENDING_EMAIL_STUDENT: i64 = 508;
pub(crate) const PENDING_ENDED_TEAM: i64 = 509;

pub(crate) const NOW: PrimitiveDateTime = datetime!(2025-06-01 12:00);

pub(crate) fn days_ago(days: i64) -> PrimitiveDateTime {
    NOW - Duration::days(days)
}

pub(crate) fn hours_ago(hours: i64) -> PrimitiveDateTime {
    NOW - Duration::hours(hours)
}

/// An unreviewed, unassigned latest submission.
pub(crate) fn pending(id: i64, target_id: i64, owner_ids: &[i64], created_at: PrimitiveDateTime) -> Submission {
    Submission {
        id,
        target_id,
        owner_ids: owner_ids.to_vec(),
        created_at,
        reviewer: None,
        evaluator_id: None,
        evaluated_at: None,
        passed_at: None,
        latest: true,
        feedback_count: 0,
    }
}

fn evaluated(
    submission: Submission,
    evaluator_id: i64,
    evaluated_at: PrimitiveDateTime,
    passed: bool,
) -> Submission {
    Submission {
        evaluator_id: Some(evaluator_id),
        evaluated_at: Some(evaluated_at),
        passed_at: passed.then_some(evaluated_at),
        ..submission
    }
}

fn level(id: i64, number: i32, name: &str) -> Level {
    Level { id, number, name: name.to_string() }
}

fn target(id: i64, level_id: i64, title: &str, mode: SubmissionMode) -> Target {
    Target { id, level_id, title: title.to_string(), mode }
}

fn team(id: i64, name: &str, access_ends_at: Option<PrimitiveDateTime>) -> Team {
    Team { id, name: name.to_string(), access_ends_at }
}

fn student(id: i64, team_id: i64, name: &str) -> Student {
    Student { id, team_id, name: name.to_string(), email: format!("student{id}@example.com") }
}

fn coach(id: i64, user_id: i64, name: &str) -> Coach {
    Coach { id, user_id, name: name.to_string() }
}

/// The shared course snapshot and the instant queries run at.
pub(crate) fn review_course() -> (CourseSnapshot, PrimitiveDateTime) {
    let mut email_student = student(EMAIL_STUDENT, TEAM_GAMMA, "Maya Chen");
    email_student.email = "pupilfirst@example.com".to_string();

    let submissions = vec![
        Submission {
            latest: false,
            ..evaluated(
                pending(SUPERSEDED, TARGET_L1, &[EMAIL_STUDENT], days_ago(11)),
                COURSE_COACH,
                days_ago(10),
                false,
            )
        },
        evaluated(
            pending(PASSED_BY_TEAM_COACH, TARGET_L1, &[EMAIL_STUDENT], days_ago(8)),
            TEAM_COACH,
            days_ago(7),
            true,
        ),
        Submission {
            feedback_count: 1,
            ..evaluated(
                pending(REJECTED_WITH_FEEDBACK, TARGET_L2, &[EMAIL_STUDENT], days_ago(7)),
                COURSE_COACH,
                days_ago(5),
                false,
            )
        },
        evaluated(
            pending(REJECTED_TEAM_SUBMISSION, TEAM_TARGET, &[EMAIL_STUDENT, 306], days_ago(9)),
            COURSE_COACH,
            days_ago(4),
            false,
        ),
        Submission {
            passed_at: Some(days_ago(3)),
            ..pending(AUTO_VERIFIED, AUTO_VERIFY_TARGET, &[EMAIL_STUDENT, 306], days_ago(3))
        },
        evaluated(
            pending(PASSED_NAMED_STUDENT, TARGET_L1, &[NAMED_STUDENT], days_ago(10)),
            TEAM_COACH,
            days_ago(6),
            true,
        ),
        Submission {
            reviewer: Some(ReviewerAssignment { coach_id: COURSE_COACH, assigned_at: hours_ago(12) }),
            ..pending(PENDING_ASSIGNED, TARGET_L1, &[301], days_ago(1))
        },
        pending(PENDING_NAMED_STUDENT, TARGET_L2, &[NAMED_STUDENT], days_ago(2)),
        pending(PENDING_EMAIL_STUDENT, TARGET_L3, &[EMAIL_STUDENT], days_ago(3)),
        pending(PENDING_ENDED_TEAM, TEAM_TARGET, &[ENDED_STUDENT], days_ago(4)),
    ];

    let snapshot = CourseSnapshot {
        course: Course { id: COURSE_ID, name: "Startup Fundamentals".to_string() },
        levels: vec![
            level(LEVEL_1, 1, "Getting Started"),
            level(LEVEL_2, 2, "Building Teams"),
            level(LEVEL_3, 3, "Shipping"),
        ],
        targets: vec![
            target(TARGET_L1, LEVEL_1, "Write a mission statement", SubmissionMode::Individual),
            target(TARGET_L2, LEVEL_2, "Interview five customers", SubmissionMode::Individual),
            target(TARGET_L3, LEVEL_3, "Launch a landing page", SubmissionMode::Individual),
            target(TEAM_TARGET, LEVEL_2, "Pitch as a team", SubmissionMode::Team),
            target(AUTO_VERIFY_TARGET, LEVEL_1, "Read the handbook", SubmissionMode::Individual),
        ],
        teams: vec![
            team(TEAM_ALPHA, "Team Alpha", None),
            team(TEAM_BETA, "Team Beta", Some(datetime!(2099-12-31 00:00))),
            team(TEAM_GAMMA, "Team Gamma", None),
            team(TEAM_ENDED, "Team Ended", Some(days_ago(1))),
        ],
        students: vec![
            student(301, TEAM_ALPHA, "Ravi Kumar"),
            student(302, TEAM_ALPHA, "Sara Lee"),
            student(NAMED_STUDENT, TEAM_BETA, "Pupilfirst Test User"),
            student(304, TEAM_BETA, "Tom Price"),
            email_student,
            student(306, TEAM_GAMMA, "Ivan Petrov"),
            student(ENDED_STUDENT, TEAM_ENDED, "Olga Novak"),
        ],
        coaches: vec![
            coach(COURSE_COACH, COURSE_COACH_USER, "Alice Course"),
            coach(TEAM_COACH, TEAM_COACH_USER, "Bob Team"),
            coach(TEAM_ONLY_COACH, TEAM_ONLY_COACH_USER, "Carol Mentor"),
        ],
        course_enrollments: vec![COURSE_COACH, TEAM_COACH],
        team_assignments: vec![
            TeamAssignment { coach_id: TEAM_COACH, team_id: TEAM_GAMMA },
            TeamAssignment { coach_id: TEAM_ONLY_COACH, team_id: TEAM_ALPHA },
        ],
        submissions,
    };

    (snapshot, NOW)
}
