//! JSON API handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::super::AppState;
use super::error_response;
use crate::services::report::{self, Report};

/// Default number of words per language group.
const DEFAULT_TOP_WORDS: usize = 20;

#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    pub top: Option<usize>,
}

/// Report over the most recently saved results.
pub async fn api_summary(
    State(state): State<AppState>,
    Query(params): Query<SummaryParams>,
) -> Response {
    let path = state.settings.results_path();
    if !path.exists() {
        return error_response(StatusCode::NOT_FOUND, "No results available yet");
    }

    let top = params.top.unwrap_or(DEFAULT_TOP_WORDS);
    let entries = match tokio::task::spawn_blocking(move || report::load_entries(&path)).await {
        Ok(Ok(entries)) => entries,
        Ok(Err(e)) => {
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Failed to read results: {}", e),
            );
        }
        Err(e) => {
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string());
        }
    };

    Json(Report::build(&entries, top)).into_response()
}

/// Liveness and backend identification.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let context = state.service.context();
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "detector": context.detector().backend_id(),
        "lexicon": context.scorer().lexicon().backend_id(),
        "malay_classifier": context.scorer().malay_classifier().backend_id(),
    }))
}
