use axum::{Json, extract::State, http::StatusCode};

use crate::data_models::SearchRequest as ValidatedRequest;
use crate::error::SearchError;
use crate::format::format_results;
use crate::search::SearchProvider;

use super::AppState;
use super::models::{HistoryResponse, SearchRequest, SearchResponse};

fn error_response(e: SearchError) -> (StatusCode, String) {
    let status = match e {
        SearchError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        SearchError::Network(_) => StatusCode::BAD_GATEWAY,
    };
    (status, e.to_string())
}

pub async fn search_handler<P: SearchProvider + 'static>(
    State(state): State<AppState<P>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let raw_limit = request.limit.as_ref().map(|l| l.to_raw());
    let entity = request
        .entity
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .unwrap_or(&state.entity);

    let validated = ValidatedRequest::from_raw(&request.term, raw_limit.as_deref(), Some(entity))
        .map_err(error_response)?;

    // Accepted terms go into the history even if the lookup then fails.
    let history = {
        let mut history = state.history.lock().await;
        history.record(validated.term());
        history.render()
    };

    let response = state
        .provider
        .search(&validated)
        .await
        .map_err(error_response)?;

    Ok(Json(SearchResponse {
        term: validated.term().to_string(),
        result_count: response.result_count,
        lines: format_results(&response),
        history,
    }))
}

pub async fn history_handler<P: SearchProvider + 'static>(
    State(state): State<AppState<P>>,
) -> Json<HistoryResponse> {
    let history = state.history.lock().await;
    Json(HistoryResponse {
        history: history.render(),
        terms: history.terms().to_vec(),
    })
}
