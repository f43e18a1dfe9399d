use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::portfolio::builder::{
    build_portfolio, portfolio_activities, PortfolioConfig, PortfolioDocument, Selection,
};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRequest {
    #[serde(default)]
    pub config: PortfolioConfig,
    /// `None` exports every eligible activity.
    #[serde(default)]
    pub selected: Option<Vec<String>>,
}

/// POST /api/v1/students/:id/portfolio
///
/// Answers after the configured generation delay.
pub async fn handle_generate_portfolio(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    AppJson(request): AppJson<PortfolioRequest>,
) -> Result<Json<PortfolioDocument>, AppError> {
    let (student, visible) = {
        let store = state.store.read().await;
        let student = store
            .student(&student_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Student {student_id} not found")))?;
        let visible = portfolio_activities(&store.activities_for(&student_id), &request.config);
        (student, visible)
    };

    let mut selection = match request.selected {
        Some(ids) => Selection::from_ids(ids),
        None => {
            let mut all = Selection::default();
            all.toggle_all(&visible);
            all
        }
    };
    selection.retain_visible(&visible);

    if selection.is_empty() {
        return Err(AppError::Validation(
            "Select at least one activity to include in the portfolio".to_string(),
        ));
    }

    tokio::time::sleep(state.config.portfolio_delay).await;

    let document = build_portfolio(&student, &visible, &selection, &request.config);
    info!(
        "Generated portfolio {} with {} activities",
        document.file_name,
        document.activities.len()
    );
    Ok(Json(document))
}
