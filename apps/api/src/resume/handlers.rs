use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::resume::generator::GeneratedResume;
use crate::resume::profile::{mock_profile, StudentProfile};
use crate::resume::templates::{find_template, ResumeTemplate, TEMPLATES};
use crate::resume::wizard::{ResumeWizard, WizardAction, WizardState};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResumeRequest {
    #[serde(default)]
    pub profile: Option<StudentProfile>,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub student_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderRequest {
    #[serde(default)]
    pub profile: Option<StudentProfile>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub step: Option<u8>,
    #[serde(default)]
    pub actions: Vec<WizardAction>,
}

fn resolve_template(id: &str) -> Result<&'static ResumeTemplate, AppError> {
    match id.trim() {
        "" => Ok(&TEMPLATES[0]),
        id => find_template(id).ok_or_else(|| AppError::Validation(format!("Unknown template '{id}'"))),
    }
}

/// The submitted profile, or the starter profile of `student_id`.
async fn resolve_profile(
    state: &AppState,
    profile: Option<StudentProfile>,
    student_id: Option<String>,
) -> Result<StudentProfile, AppError> {
    match (profile, student_id) {
        (Some(profile), _) => Ok(profile),
        (None, Some(student_id)) => {
            let store = state.store.read().await;
            let student = store
                .student(&student_id)
                .ok_or_else(|| AppError::NotFound(format!("Student {student_id} not found")))?;
            Ok(mock_profile(student))
        }
        (None, None) => Err(AppError::Validation(
            "Either profile or studentId is required".to_string(),
        )),
    }
}

/// GET /api/v1/resumes/templates
pub async fn handle_list_templates() -> Json<Vec<ResumeTemplate>> {
    Json(TEMPLATES.to_vec())
}

/// POST /api/v1/resumes/generate
///
/// Uses the submitted profile, or the starter profile of `studentId` when
/// none is given. Always answers with HTML; see `ResumeGenerator`.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    AppJson(request): AppJson<GenerateResumeRequest>,
) -> Result<Json<GeneratedResume>, AppError> {
    let template = resolve_template(&request.template_id)?;
    let profile = resolve_profile(&state, request.profile, request.student_id).await?;

    let mut wizard = ResumeWizard::new(profile);
    wizard.select_template(template);
    wizard.validate().map_err(AppError::Validation)?;

    let resume = state
        .resume_generator
        .generate_resume(&wizard.profile, wizard.template())
        .await;
    Ok(Json(resume))
}

/// POST /api/v1/resumes/builder
///
/// Applies the builder edits in order to the given step and profile and
/// returns the resulting builder state. Starts from step 1 and the starter
/// profile of `studentId` when those are omitted.
pub async fn handle_resume_builder(
    State(state): State<AppState>,
    AppJson(request): AppJson<BuilderRequest>,
) -> Result<Json<WizardState>, AppError> {
    let template = resolve_template(&request.template_id)?;
    let profile = resolve_profile(&state, request.profile, request.student_id).await?;

    let mut wizard = ResumeWizard::new(profile).at_step(request.step.unwrap_or(1));
    wizard.select_template(template);
    for action in request.actions {
        wizard.apply(action).map_err(AppError::Validation)?;
    }
    Ok(Json(wizard.into_state()))
}
