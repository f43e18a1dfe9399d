//! Axum route handlers for student activities and certificates.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::info;

use crate::activities::listing::{filter_activities, ListingFilter, ListingParams};
use crate::activities::submission::{NewActivity, NewCertificate};
use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::models::{Activity, Certificate};
use crate::state::AppState;

fn student_not_found(student_id: &str) -> AppError {
    AppError::NotFound(format!("Student {student_id} not found"))
}

/// GET /api/v1/students/:id/activities
pub async fn handle_list_activities(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    AppQuery(params): AppQuery<ListingParams>,
) -> Result<Json<Vec<Activity>>, AppError> {
    let filter = ListingFilter::from_params(params, None).map_err(AppError::Validation)?;
    let store = state.store.read().await;
    if store.student(&student_id).is_none() {
        return Err(student_not_found(&student_id));
    }
    Ok(Json(filter_activities(&store.activities_for(&student_id), &filter)))
}

/// POST /api/v1/students/:id/activities
pub async fn handle_submit_activity(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    AppJson(request): AppJson<NewActivity>,
) -> Result<(StatusCode, Json<Activity>), AppError> {
    let mut store = state.store.write().await;
    if store.student(&student_id).is_none() {
        return Err(student_not_found(&student_id));
    }

    let activity = request
        .into_activity(&student_id, Utc::now())
        .map_err(AppError::Validation)?;
    info!("Activity {} submitted by {}", activity.id, student_id);
    store.push_activity(activity.clone());

    Ok((StatusCode::CREATED, Json(activity)))
}

/// GET /api/v1/students/:id/certificates
pub async fn handle_list_certificates(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<Certificate>>, AppError> {
    let store = state.store.read().await;
    if store.student(&student_id).is_none() {
        return Err(student_not_found(&student_id));
    }
    Ok(Json(store.certificates_for(&student_id)))
}

/// POST /api/v1/students/:id/certificates
pub async fn handle_submit_certificate(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    AppJson(request): AppJson<NewCertificate>,
) -> Result<(StatusCode, Json<Certificate>), AppError> {
    let mut store = state.store.write().await;
    if store.student(&student_id).is_none() {
        return Err(student_not_found(&student_id));
    }

    let certificate = request
        .into_certificate(&student_id, Utc::now())
        .map_err(AppError::Validation)?;
    info!("Certificate {} submitted for approval by {}", certificate.id, student_id);
    store.push_certificate(certificate.clone());

    Ok((StatusCode::CREATED, Json(certificate)))
}
