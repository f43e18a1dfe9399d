use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::auth::current_user;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::{Role, User};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub role: String,
}

/// POST /api/v1/auth/login
///
/// Answers after the configured login delay.
pub async fn handle_login(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoginRequest>,
) -> Result<Json<User>, AppError> {
    if request.role.trim().is_empty() {
        return Err(AppError::Validation("role is required".to_string()));
    }
    let role: Role = request.role.parse().map_err(AppError::Validation)?;

    tokio::time::sleep(state.config.login_delay).await;

    let user = current_user(role)
        .ok_or_else(|| AppError::NotFound(format!("No user for role {role}")))?;
    info!("Signed in {} as {}", user.email, role);
    Ok(Json(user))
}
