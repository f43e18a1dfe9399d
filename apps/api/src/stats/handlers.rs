//! Axum route handlers for dashboard aggregates.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::fixtures;
use crate::state::AppState;
use crate::stats::analytics::{pending_certificates, trend_approval_rate, AdminOverview};
use crate::stats::dashboard::{student_dashboard, StudentDashboard};

/// GET /api/v1/students/:id/dashboard
pub async fn handle_student_dashboard(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<StudentDashboard>, AppError> {
    let store = state.store.read().await;
    let student = store
        .student(&student_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Student {student_id} not found")))?;

    Ok(Json(student_dashboard(
        student,
        &store.activities_for(&student_id),
        &store.certificates_for(&student_id),
    )))
}

/// GET /api/v1/admin/analytics
pub async fn handle_admin_analytics(State(state): State<AppState>) -> Json<AdminOverview> {
    let store = state.store.read().await;
    let analytics = fixtures::analytics();
    Json(AdminOverview {
        trend_approval_rate: trend_approval_rate(&analytics.monthly_trends),
        analytics,
        pending_certificates: pending_certificates(&store.certificates),
    })
}
