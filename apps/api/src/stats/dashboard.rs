use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Activity, Category, Certificate, Status, Student};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentDashboard {
    pub student: Student,
    pub approved_activities: usize,
    pub pending_activities: usize,
    pub total_points: u32,
    pub category_counts: BTreeMap<Category, usize>,
    pub approved_certificates: usize,
    pub pending_certificates: usize,
    pub certificate_points: u32,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FacultyCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub total_reviewed: usize,
}

/// Only approved items contribute points; category counts cover every status.
pub fn student_dashboard(
    student: Student,
    activities: &[Activity],
    certificates: &[Certificate],
) -> StudentDashboard {
    let approved: Vec<&Activity> = activities
        .iter()
        .filter(|a| a.status == Status::Approved)
        .collect();

    let mut category_counts = BTreeMap::new();
    for activity in activities {
        *category_counts.entry(activity.category).or_insert(0) += 1;
    }

    let approved_certs: Vec<&Certificate> = certificates
        .iter()
        .filter(|c| c.status == Status::Approved)
        .collect();

    StudentDashboard {
        student,
        approved_activities: approved.len(),
        pending_activities: activities.iter().filter(|a| a.status == Status::Pending).count(),
        total_points: approved.iter().map(|a| a.points).sum(),
        category_counts,
        approved_certificates: approved_certs.len(),
        pending_certificates: certificates.iter().filter(|c| c.status == Status::Pending).count(),
        certificate_points: approved_certs.iter().map(|c| c.points).sum(),
    }
}

pub fn faculty_counts(activities: &[Activity]) -> FacultyCounts {
    let count = |status: Status| activities.iter().filter(|a| a.status == status).count();
    let approved = count(Status::Approved);
    let rejected = count(Status::Rejected);
    FacultyCounts {
        pending: count(Status::Pending),
        approved,
        rejected,
        total_reviewed: approved + rejected,
    }
}
