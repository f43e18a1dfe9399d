use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::fixtures;
use crate::results::grades::{semester_result, SemesterResult};
use crate::state::AppState;

/// GET /api/v1/students/:id/results
pub async fn handle_semester_results(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<SemesterResult>, AppError> {
    if state.store.read().await.student(&student_id).is_none() {
        return Err(AppError::NotFound(format!("Student {student_id} not found")));
    }

    Ok(Json(semester_result(
        &student_id,
        fixtures::CURRENT_SEMESTER,
        fixtures::semester_subjects(),
    )))
}
