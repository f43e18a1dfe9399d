use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Academic,
    Technical,
    Extracurricular,
    Sports,
    Cultural,
    Social,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Academic,
        Category::Technical,
        Category::Extracurricular,
        Category::Sports,
        Category::Cultural,
        Category::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Academic => "academic",
            Category::Technical => "technical",
            Category::Extracurricular => "extracurricular",
            Category::Sports => "sports",
            Category::Cultural => "cultural",
            Category::Social => "social",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lowered)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Approved,
    Rejected,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Approved => "approved",
            Status::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "approved" => Ok(Status::Approved),
            "rejected" => Ok(Status::Rejected),
            _ => Err(format!("unknown status '{s}'")),
        }
    }
}

/// A student-submitted achievement awaiting or carrying a faculty review.
///
/// Only the review fields (`status`, `points`, `faculty_remarks`, `approved_by`,
/// `approved_at`) change after creation, and only through `review::apply_review`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub student_id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub date: NaiveDate,
    pub status: Status,
    pub documents: Vec<String>,
    pub points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty_remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub student_id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub issuer: String,
    pub date_issued: NaiveDate,
    pub status: Status,
    pub certificate_file: String,
    pub points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty_remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Anything that goes through the faculty review state machine.
pub trait Reviewable {
    fn status(&self) -> Status;
    fn points(&self) -> u32;
    fn record_review(
        &mut self,
        status: Status,
        points: u32,
        remarks: String,
        reviewer: String,
        at: DateTime<Utc>,
    );
}

impl Reviewable for Activity {
    fn status(&self) -> Status {
        self.status
    }

    fn points(&self) -> u32 {
        self.points
    }

    fn record_review(
        &mut self,
        status: Status,
        points: u32,
        remarks: String,
        reviewer: String,
        at: DateTime<Utc>,
    ) {
        self.status = status;
        self.points = points;
        self.faculty_remarks = Some(remarks);
        self.approved_by = Some(reviewer);
        self.approved_at = Some(at);
    }
}

impl Reviewable for Certificate {
    fn status(&self) -> Status {
        self.status
    }

    fn points(&self) -> u32 {
        self.points
    }

    fn record_review(
        &mut self,
        status: Status,
        points: u32,
        remarks: String,
        reviewer: String,
        at: DateTime<Utc>,
    ) {
        self.status = status;
        self.points = points;
        self.faculty_remarks = Some(remarks);
        self.approved_by = Some(reviewer);
        self.approved_at = Some(at);
    }
}
