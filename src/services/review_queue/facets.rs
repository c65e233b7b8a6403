use std::collections::BTreeMap;

use serde::Serialize;

use super::filters::{Facet, ReviewFilters};
use super::snapshot::{SnapshotIndex, Submission};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct LevelOption {
    pub(crate) id: i64,
    pub(crate) number: i32,
    pub(crate) name: String,
    pub(crate) label: String,
    pub(crate) count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct TargetOption {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) level_id: i64,
    pub(crate) level_number: i32,
    pub(crate) count: usize,
}

/// Result sizes the caller would get by picking this coach on each coach facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct CoachOption {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) is_me: bool,
    pub(crate) personal_coach: usize,
    pub(crate) assigned_to: usize,
    pub(crate) reviewed_by: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub(crate) struct FacetMetadata {
    pub(crate) levels: Vec<LevelOption>,
    pub(crate) targets: Vec<TargetOption>,
    pub(crate) coaches: Vec<CoachOption>,
}

#[derive(Default)]
struct CoachCounts {
    personal_coach: usize,
    assigned_to: usize,
    reviewed_by: usize,
}

/// Builds option lists for every facet. Each facet is computed against the tab set filtered by
/// all other active facets, so every offered option leads to a non-empty result.
pub(crate) fn build_facets(
    tab_set: &[&Submission],
    filters: &ReviewFilters,
    index: &SnapshotIndex<'_>,
    reviewer_coach_id: Option<i64>,
) -> FacetMetadata {
    let levels = level_options(tab_set, &filters.without(Facet::Level), index);
    let targets = target_options(tab_set, &filters.without(Facet::Target), index);
    let coaches = coach_options(tab_set, filters, index, reviewer_coach_id);

    FacetMetadata { levels, targets, coaches }
}

fn matching<'s>(
    tab_set: &[&'s Submission],
    filters: &ReviewFilters,
    index: &SnapshotIndex<'_>,
) -> Vec<&'s Submission> {
    tab_set.iter().copied().filter(|submission| filters.matches(submission, index)).collect()
}

fn level_options(
    tab_set: &[&Submission],
    filters: &ReviewFilters,
    index: &SnapshotIndex<'_>,
) -> Vec<LevelOption> {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for submission in matching(tab_set, filters, index) {
        if let Some(level) = index.level_of(submission) {
            *counts.entry(level.id).or_default() += 1;
        }
    }

    let mut options = counts
        .into_iter()
        .filter_map(|(id, count)| {
            index.level(id).map(|level| LevelOption {
                id,
                number: level.number,
                name: level.name.clone(),
                label: format!("{}, {}", level.number, level.name),
                count,
            })
        })
        .collect::<Vec<_>>();
    options.sort_by_key(|option| (option.number, option.id));
    options
}

fn target_options(
    tab_set: &[&Submission],
    filters: &ReviewFilters,
    index: &SnapshotIndex<'_>,
) -> Vec<TargetOption> {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for submission in matching(tab_set, filters, index) {
        *counts.entry(submission.target_id).or_default() += 1;
    }

    let mut options = counts
        .into_iter()
        .filter_map(|(id, count)| {
            let target = index.target(id)?;
            let level = index.level(target.level_id)?;
            Some(TargetOption {
                id,
                title: target.title.clone(),
                level_id: level.id,
                level_number: level.number,
                count,
            })
        })
        .collect::<Vec<_>>();
    options.sort_by(|a, b| {
        (a.level_number, &a.title, a.id).cmp(&(b.level_number, &b.title, b.id))
    });
    options
}

fn coach_options(
    tab_set: &[&Submission],
    filters: &ReviewFilters,
    index: &SnapshotIndex<'_>,
    reviewer_coach_id: Option<i64>,
) -> Vec<CoachOption> {
    let mut counts: BTreeMap<i64, CoachCounts> = BTreeMap::new();

    let personal = filters.without(Facet::PersonalCoach);
    for submission in matching(tab_set, &personal, index) {
        for coach_id in index.personal_coaches_of(submission) {
            counts.entry(coach_id).or_default().personal_coach += 1;
        }
    }

    let assigned = filters.without(Facet::AssignedTo);
    for submission in matching(tab_set, &assigned, index) {
        if let Some(assignment) = submission.reviewer {
            counts.entry(assignment.coach_id).or_default().assigned_to += 1;
        }
    }

    let reviewed = filters.without(Facet::ReviewedBy);
    for submission in matching(tab_set, &reviewed, index) {
        if let Some(evaluator_id) = submission.evaluator_id {
            counts.entry(evaluator_id).or_default().reviewed_by += 1;
        }
    }

    let mut options = counts
        .into_iter()
        .filter_map(|(id, counts)| {
            index.coach(id).map(|coach| CoachOption {
                id,
                name: coach.name.clone(),
                is_me: reviewer_coach_id == Some(id),
                personal_coach: counts.personal_coach,
                assigned_to: counts.assigned_to,
                reviewed_by: counts.reviewed_by,
            })
        })
        .collect::<Vec<_>>();
    options.sort_by(|a, b| (!a.is_me, &a.name, a.id).cmp(&(!b.is_me, &b.name, b.id)));
    options
}
