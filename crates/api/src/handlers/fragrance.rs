//! Fragrance API proxy handlers.
//!
//! Successful upstream JSON is passed through untouched so the browser never
//! needs the API key.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use findify_core::messages;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{respond, AppError, AppResult};
use crate::response::json_utf8;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// GET /api/perfumes/search?q={query}
pub async fn search_perfumes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let result = search(&state, params.q.as_deref()).await;
    respond(result.map(passthrough), state.config.debug)
}

/// GET /api/dupes/{id}
pub async fn find_dupes(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let result = dupes(&state, &id).await;
    respond(result.map(passthrough), state.config.debug)
}

/// GET /api/dupes
///
/// The id segment is missing altogether.
pub async fn dupes_without_id() -> AppError {
    AppError::BadRequest(messages::PERFUME_ID_REQUIRED.to_string())
}

async fn search(state: &AppState, query: Option<&str>) -> AppResult<Value> {
    let query = query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::BadRequest(messages::SEARCH_QUERY_REQUIRED.to_string()))?;

    Ok(state.fragrance.search_perfumes(query).await?)
}

async fn dupes(state: &AppState, id: &str) -> AppResult<Value> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::BadRequest(messages::PERFUME_ID_REQUIRED.to_string()));
    }

    Ok(state.fragrance.find_dupes(id).await?)
}

fn passthrough(body: Value) -> Response {
    json_utf8(StatusCode::OK, &body)
}
