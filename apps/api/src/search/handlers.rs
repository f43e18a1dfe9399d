//! Axum route handlers for the Search API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::fixtures::DEPARTMENTS;
use crate::models::Category;
use crate::search::debounce::SearchSession;
use crate::search::engine::{search, SearchResults};
use crate::search::query::{SearchParams, SearchQuery};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FacetsResponse {
    pub categories: Vec<Category>,
    pub departments: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub is_searching: bool,
    pub results: SearchResults,
}

fn parse_query(params: SearchParams) -> Result<SearchQuery, AppError> {
    SearchQuery::try_from(params).map_err(AppError::Validation)
}

/// GET /api/v1/search
///
/// One-shot search without debounce.
pub async fn handle_search(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchParams>,
) -> Result<Json<SearchResults>, AppError> {
    let query = parse_query(params)?;
    let store = state.store.read().await;
    let results = search(&store.activities, &store.students, &query);
    debug!("Search {:?} matched {}", query.text, results.total);
    Ok(Json(results))
}

/// GET /api/v1/search/facets
pub async fn handle_facets() -> Json<FacetsResponse> {
    Json(FacetsResponse {
        categories: Category::ALL.to_vec(),
        departments: DEPARTMENTS.to_vec(),
    })
}

/// PUT /api/v1/search/sessions/:session_id
///
/// Feeds one input change into the session's debouncer, creating it on first use.
pub async fn handle_session_input(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    AppJson(params): AppJson<SearchParams>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let query = parse_query(params)?;
    let mut sessions = state.search_sessions.lock().await;
    let session = sessions.get_or_insert_with(session_id, || {
        SearchSession::new(state.store.clone(), state.config.search_debounce)
    });
    session.update(query);
    let response = SessionResponse {
        is_searching: session.is_searching(),
        results: session.latest(),
    };
    debug!("{} live search sessions", sessions.len());

    Ok((StatusCode::ACCEPTED, Json(response)))
}

/// GET /api/v1/search/sessions/:session_id
pub async fn handle_session_results(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    let mut sessions = state.search_sessions.lock().await;
    let session = sessions
        .get(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("Search session {session_id} not found")))?;

    Ok(Json(SessionResponse {
        is_searching: session.is_searching(),
        results: session.latest(),
    }))
}

/// DELETE /api/v1/search/sessions/:session_id
///
/// Drops the session, cancelling any pending search.
pub async fn handle_close_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> StatusCode {
    match state.search_sessions.lock().await.remove(&session_id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}
