use serde::Deserialize;

use crate::models::{Activity, Category, Status};
use crate::search::query::parse_facet;

/// Raw listing filters from the activities and review-queue pages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

/// Unlike the search engine, an empty text here matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    pub status: Option<Status>,
    pub category: Option<Category>,
    pub text: String,
}

impl ListingFilter {
    /// `default_status` applies only when the caller sent no status at all.
    pub fn from_params(params: ListingParams, default_status: Option<Status>) -> Result<Self, String> {
        let status = match params.status {
            None => default_status,
            Some(raw) => parse_facet(Some(&raw))?,
        };
        Ok(Self {
            status,
            category: parse_facet(params.category.as_deref())?,
            text: params.q.unwrap_or_default(),
        })
    }

    pub fn matches(&self, activity: &Activity) -> bool {
        let status_ok = self.status.map_or(true, |s| activity.status == s);
        let category_ok = self.category.map_or(true, |c| activity.category == c);
        let text_ok = self.text.is_empty() || {
            let needle = self.text.to_lowercase();
            activity.title.to_lowercase().contains(&needle)
                || activity.description.to_lowercase().contains(&needle)
        };
        status_ok && category_ok && text_ok
    }
}

pub fn filter_activities(activities: &[Activity], filter: &ListingFilter) -> Vec<Activity> {
    activities
        .iter()
        .filter(|a| filter.matches(a))
        .cloned()
        .collect()
}
