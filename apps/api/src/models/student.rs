use serde::{Deserialize, Serialize};

/// Searchable student record with precomputed activity aggregates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub year: u8,
    pub cgpa: f64,
    pub total_activities: u32,
    pub total_points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}
