use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Category, Status};

/// Sentinel accepted by every facet to mean "no constraint".
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    #[default]
    All,
    Activities,
    Students,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Relevance,
    Date,
    Points,
    Name,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Raw query-string form of a search, exactly as the search box and
/// selects submit it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default, rename = "type")]
    pub result_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

/// A validated search. `None` facets are unconstrained.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub text: String,
    pub result_type: ResultType,
    pub category: Option<Category>,
    pub status: Option<Status>,
    pub department: Option<String>,
    pub sort: SortKey,
    pub order: SortOrder,
}

impl SearchQuery {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

impl TryFrom<SearchParams> for SearchQuery {
    type Error = String;

    fn try_from(params: SearchParams) -> Result<Self, Self::Error> {
        Ok(SearchQuery {
            text: params.q,
            result_type: parse_keyword(params.result_type.as_deref(), "type")?,
            category: parse_facet(params.category.as_deref())?,
            status: parse_facet(params.status.as_deref())?,
            department: parse_facet::<String>(params.department.as_deref())?,
            sort: parse_keyword(params.sort.as_deref(), "sort")?,
            order: parse_keyword(params.order.as_deref(), "order")?,
        })
    }
}

/// Absent, blank, or `all` means unconstrained.
pub fn parse_facet<T>(raw: Option<&str>) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: ToString,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case(ALL) => Ok(None),
        Some(v) => v.parse::<T>().map(Some).map_err(|e| e.to_string()),
    }
}

/// Serde adapter for facet fields sent as strings (`"all"` → `None`).
pub fn deserialize_facet<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
    T::Err: ToString,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    parse_facet(raw.as_deref()).map_err(serde::de::Error::custom)
}

fn parse_keyword<T>(raw: Option<&str>, field: &str) -> Result<T, String>
where
    T: Default + for<'de> Deserialize<'de>,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(v) => serde_json::from_value(serde_json::Value::String(v.to_lowercase()))
            .map_err(|_| format!("unknown {field} '{v}'")),
    }
}
