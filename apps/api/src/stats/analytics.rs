use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Category, Certificate, Status};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    pub month: String,
    pub activities: u32,
    pub approvals: u32,
}

/// Institution-wide figures shown on the admin dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_students: u32,
    pub total_activities: u32,
    pub total_certificates: u32,
    pub approval_rate: f64,
    pub department_stats: BTreeMap<String, u32>,
    pub category_stats: BTreeMap<Category, u32>,
    pub monthly_trends: Vec<MonthlyTrend>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    pub analytics: Analytics,
    pub trend_approval_rate: f64,
    pub pending_certificates: Vec<Certificate>,
}

pub fn pending_certificates(certificates: &[Certificate]) -> Vec<Certificate> {
    certificates
        .iter()
        .filter(|c| c.status == Status::Pending)
        .cloned()
        .collect()
}

/// Share of trend-window submissions that were approved, in percent.
pub fn trend_approval_rate(trends: &[MonthlyTrend]) -> f64 {
    let (activities, approvals) = trends
        .iter()
        .fold((0u32, 0u32), |(a, p), t| (a + t.activities, p + t.approvals));
    if activities == 0 {
        return 0.0;
    }
    f64::from(approvals) / f64::from(activities) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_pending_certificates_from_fixtures() {
        let pending = pending_certificates(&fixtures::certificates());
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "cert1");
    }

    #[test]
    fn test_trend_approval_rate() {
        let rate = trend_approval_rate(&fixtures::analytics().monthly_trends);
        // 1440 approvals over 1830 submissions
        assert!((rate - 78.688).abs() < 0.01);
        assert_eq!(trend_approval_rate(&[]), 0.0);
    }

    #[test]
    fn test_category_keys_serialize_lowercase() {
        let value = serde_json::to_value(fixtures::analytics()).unwrap();
        assert_eq!(value["categoryStats"]["technical"], 850);
        assert_eq!(value["departmentStats"]["Civil"], 580);
    }
}
