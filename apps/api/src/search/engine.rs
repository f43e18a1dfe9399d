//! In-memory query engine over activities and students.
//!
//! Pipeline: text match + facets → sort → result-type clearing. The clearing
//! step runs last, after sorting. Inputs are borrowed and never reordered;
//! every call builds a fresh view.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::{Activity, Student};
use crate::search::query::{ResultType, SearchQuery, SortKey, SortOrder};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResults {
    pub activities: Vec<Activity>,
    pub students: Vec<Student>,
    pub total: usize,
}

impl SearchResults {
    pub fn empty() -> Self {
        Self::default()
    }
}

pub fn search(activities: &[Activity], students: &[Student], query: &SearchQuery) -> SearchResults {
    if query.text.trim().is_empty() {
        return SearchResults::empty();
    }

    let needle = query.text.to_lowercase();

    let mut matched_activities: Vec<Activity> = activities
        .iter()
        .filter(|a| activity_matches_text(a, &needle))
        .filter(|a| query.category.map_or(true, |c| a.category == c))
        .filter(|a| query.status.map_or(true, |s| a.status == s))
        .cloned()
        .collect();

    let mut matched_students: Vec<Student> = students
        .iter()
        .filter(|s| student_matches_text(s, &needle))
        .filter(|s| {
            query
                .department
                .as_deref()
                .map_or(true, |d| s.department == d)
        })
        .cloned()
        .collect();

    match query.sort {
        // No scoring exists; relevance keeps source order.
        SortKey::Relevance => {}
        SortKey::Date => {
            matched_activities.sort_by(|a, b| directed(a.date.cmp(&b.date), query.order))
        }
        SortKey::Points => {
            matched_activities.sort_by(|a, b| directed(a.points.cmp(&b.points), query.order))
        }
        SortKey::Name => {
            matched_students.sort_by(|a, b| directed(a.name.cmp(&b.name), query.order))
        }
    }

    match query.result_type {
        ResultType::All => {}
        ResultType::Activities => matched_students.clear(),
        ResultType::Students => matched_activities.clear(),
    }

    let total = matched_activities.len() + matched_students.len();
    SearchResults {
        activities: matched_activities,
        students: matched_students,
        total,
    }
}

/// `needle` must already be lowercase.
pub fn activity_matches_text(activity: &Activity, needle: &str) -> bool {
    activity.title.to_lowercase().contains(needle)
        || activity.description.to_lowercase().contains(needle)
        || activity.student_id.to_lowercase().contains(needle)
}

/// `needle` must already be lowercase.
pub fn student_matches_text(student: &Student, needle: &str) -> bool {
    student.name.to_lowercase().contains(needle)
        || student.id.to_lowercase().contains(needle)
        || student.department.to_lowercase().contains(needle)
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}
