//! Student submissions. Validation is presence-only: required fields must be
//! non-blank. Select and date inputs must still parse into their typed values.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{Activity, Category, Certificate, Status};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub documents: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCertificate {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub date_issued: String,
    #[serde(default)]
    pub certificate_file: String,
}

fn require<'a>(value: &'a str, field: &str) -> Result<&'a str, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(format!("{field} is required"))
    } else {
        Ok(trimmed)
    }
}

fn parse_date(value: &str, field: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| format!("{field} must be a YYYY-MM-DD date"))
}

impl NewActivity {
    /// Builds a pending, zero-point activity owned by `student_id`.
    pub fn into_activity(self, student_id: &str, now: DateTime<Utc>) -> Result<Activity, String> {
        let title = require(&self.title, "title")?.to_string();
        let category: Category = require(&self.category, "category")?.parse()?;
        let date = parse_date(require(&self.date, "date")?, "date")?;

        Ok(Activity {
            id: Uuid::new_v4().to_string(),
            student_id: student_id.to_string(),
            title,
            description: self.description.trim().to_string(),
            category,
            date,
            status: Status::Pending,
            documents: self.documents,
            points: 0,
            faculty_remarks: None,
            approved_by: None,
            approved_at: None,
            created_at: now,
        })
    }
}

impl NewCertificate {
    pub fn into_certificate(self, student_id: &str, now: DateTime<Utc>) -> Result<Certificate, String> {
        let title = require(&self.title, "title")?.to_string();
        let issuer = require(&self.issuer, "issuer")?.to_string();
        let category: Category = require(&self.category, "category")?.parse()?;
        let date_issued = parse_date(require(&self.date_issued, "dateIssued")?, "dateIssued")?;
        let description = require(&self.description, "description")?.to_string();
        let certificate_file = require(&self.certificate_file, "certificateFile")?.to_string();

        Ok(Certificate {
            id: Uuid::new_v4().to_string(),
            student_id: student_id.to_string(),
            title,
            description,
            category,
            issuer,
            date_issued,
            status: Status::Pending,
            certificate_file,
            points: 0,
            faculty_remarks: None,
            approved_by: None,
            approved_at: None,
            created_at: now,
        })
    }
}
