//! Portfolio assembly over a student's approved activities.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{Activity, Category, Status, Student};
use crate::search::query::deserialize_facet;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioSort {
    #[default]
    Date,
    Points,
    Title,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioConfig {
    pub template: String,
    pub include_personal_info: bool,
    pub include_academic_info: bool,
    #[serde(rename = "includeCGPA")]
    pub include_cgpa: bool,
    pub custom_title: String,
    pub custom_intro: String,
    pub sort_by: PortfolioSort,
    #[serde(deserialize_with = "deserialize_facet")]
    pub filter_by_category: Option<Category>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            template: "professional".to_string(),
            include_personal_info: true,
            include_academic_info: true,
            include_cgpa: true,
            custom_title: String::new(),
            custom_intro: String::new(),
            sort_by: PortfolioSort::Date,
            filter_by_category: None,
        }
    }
}

/// Approved activities only, category-filtered, then sorted.
/// Date and points sort descending; title sorts ascending.
pub fn portfolio_activities(activities: &[Activity], config: &PortfolioConfig) -> Vec<Activity> {
    let mut eligible: Vec<Activity> = activities
        .iter()
        .filter(|a| a.status == Status::Approved)
        .filter(|a| config.filter_by_category.map_or(true, |c| a.category == c))
        .cloned()
        .collect();

    match config.sort_by {
        PortfolioSort::Date => eligible.sort_by(|a, b| b.date.cmp(&a.date)),
        PortfolioSort::Points => eligible.sort_by(|a, b| b.points.cmp(&a.points)),
        PortfolioSort::Title => eligible.sort_by(|a, b| a.title.cmp(&b.title)),
    }
    eligible
}

/// Ordered set of selected activity ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn from_ids(ids: Vec<String>) -> Self {
        let mut selection = Self::default();
        for id in ids {
            if !selection.contains(&id) {
                selection.ids.push(id);
            }
        }
        selection
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn toggle(&mut self, id: &str) {
        if self.contains(id) {
            self.ids.retain(|s| s != id);
        } else {
            self.ids.push(id.to_string());
        }
    }

    /// Selects every visible activity, or clears when all are already selected.
    pub fn toggle_all(&mut self, visible: &[Activity]) {
        if self.ids.len() == visible.len() {
            self.ids.clear();
        } else {
            self.ids = visible.iter().map(|a| a.id.clone()).collect();
        }
    }

    /// Drops ids that are not among the visible, eligible activities.
    pub fn retain_visible(&mut self, visible: &[Activity]) {
        self.ids.retain(|id| visible.iter().any(|a| &a.id == id));
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDocument {
    pub file_name: String,
    pub title: String,
    pub intro: String,
    pub template: String,
    pub student_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cgpa: Option<f64>,
    pub activities: Vec<Activity>,
    pub total_points: u32,
    pub categories: Vec<Category>,
}

/// `"Arjun  Sharma"` becomes `Arjun_Sharma_Portfolio.pdf`.
pub fn portfolio_file_name(student_name: &str) -> String {
    let stem = student_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{stem}_Portfolio.pdf")
}

/// Keeps the display order of `ordered` and drops anything not selected.
pub fn build_portfolio(
    student: &Student,
    ordered: &[Activity],
    selection: &Selection,
    config: &PortfolioConfig,
) -> PortfolioDocument {
    let chosen: Vec<Activity> = ordered
        .iter()
        .filter(|a| selection.contains(&a.id))
        .cloned()
        .collect();

    let categories: BTreeSet<Category> = chosen.iter().map(|a| a.category).collect();
    let title = if config.custom_title.trim().is_empty() {
        format!("{} - Academic Portfolio", student.name)
    } else {
        config.custom_title.trim().to_string()
    };

    PortfolioDocument {
        file_name: portfolio_file_name(&student.name),
        title,
        intro: config.custom_intro.trim().to_string(),
        template: config.template.clone(),
        student_name: student.name.clone(),
        email: config.include_personal_info.then(|| student.email.clone()),
        department: config
            .include_academic_info
            .then(|| student.department.clone()),
        cgpa: (config.include_academic_info && config.include_cgpa).then_some(student.cgpa),
        total_points: chosen.iter().map(|a| a.points).sum(),
        categories: categories.into_iter().collect(),
        activities: chosen,
    }
}
