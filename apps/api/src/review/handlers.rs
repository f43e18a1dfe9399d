//! Axum route handlers for the faculty review queue and admin certificate review.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::activities::listing::{filter_activities, ListingFilter, ListingParams};
use crate::auth::current_user;
use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::models::{Activity, Certificate, Role, Status};
use crate::review::machine::{apply_review, Review, ReviewRequest};
use crate::review::points::{points_range, points_range_for_label, PointsRange};
use crate::state::AppState;
use crate::stats::dashboard::{faculty_counts, FacultyCounts};

#[derive(Debug, Serialize)]
pub struct ReviewQueueResponse {
    pub activities: Vec<Activity>,
    pub counts: FacultyCounts,
}

#[derive(Debug, Serialize)]
pub struct SuggestedPointsResponse {
    pub range: PointsRange,
    pub suggested: u32,
}

impl From<PointsRange> for SuggestedPointsResponse {
    fn from(range: PointsRange) -> Self {
        Self {
            suggested: range.suggested(),
            range,
        }
    }
}

/// Review form plus an optional reviewer override.
#[derive(Debug, Deserialize)]
pub struct ReviewBody {
    #[serde(flatten)]
    pub review: ReviewRequest,
    #[serde(default)]
    pub reviewer: Option<String>,
}

fn reviewer_name(body_reviewer: Option<String>, role: Role) -> String {
    body_reviewer
        .filter(|r| !r.trim().is_empty())
        .or_else(|| current_user(role).map(|u| u.name))
        .unwrap_or_else(|| role.to_string())
}

/// GET /api/v1/faculty/queue
///
/// Status defaults to `pending` when not supplied.
pub async fn handle_review_queue(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListingParams>,
) -> Result<Json<ReviewQueueResponse>, AppError> {
    let filter =
        ListingFilter::from_params(params, Some(Status::Pending)).map_err(AppError::Validation)?;
    let store = state.store.read().await;

    Ok(Json(ReviewQueueResponse {
        activities: filter_activities(&store.activities, &filter),
        counts: faculty_counts(&store.activities),
    }))
}

/// GET /api/v1/faculty/activities/:id/suggested-points
pub async fn handle_suggested_points(
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
) -> Result<Json<SuggestedPointsResponse>, AppError> {
    let store = state.store.read().await;
    let activity = store
        .activities
        .iter()
        .find(|a| a.id == activity_id)
        .ok_or_else(|| AppError::NotFound(format!("Activity {activity_id} not found")))?;

    Ok(Json(points_range(activity.category).into()))
}

/// GET /api/v1/faculty/points-range/:category
///
/// Unknown categories get the default band rather than an error.
pub async fn handle_points_range(Path(category): Path<String>) -> Json<SuggestedPointsResponse> {
    Json(points_range_for_label(&category).into())
}

/// POST /api/v1/faculty/activities/:id/review
pub async fn handle_review_activity(
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
    AppJson(body): AppJson<ReviewBody>,
) -> Result<Json<Activity>, AppError> {
    let review = Review::try_from(body.review)?;
    let reviewer = reviewer_name(body.reviewer, Role::Faculty);

    let mut store = state.store.write().await;
    let activity = store
        .activity_mut(&activity_id)
        .ok_or_else(|| AppError::NotFound(format!("Activity {activity_id} not found")))?;

    apply_review(activity, &review, &reviewer, Utc::now());
    Ok(Json(activity.clone()))
}

/// POST /api/v1/admin/certificates/:id/review
pub async fn handle_review_certificate(
    State(state): State<AppState>,
    Path(certificate_id): Path<String>,
    AppJson(body): AppJson<ReviewBody>,
) -> Result<Json<Certificate>, AppError> {
    let review = Review::try_from(body.review)?;
    let reviewer = reviewer_name(body.reviewer, Role::Admin);

    let mut store = state.store.write().await;
    let certificate = store
        .certificate_mut(&certificate_id)
        .ok_or_else(|| AppError::NotFound(format!("Certificate {certificate_id} not found")))?;

    apply_review(certificate, &review, &reviewer, Utc::now());
    Ok(Json(certificate.clone()))
}
