use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::error::Result;
use crate::AppState;

#[axum::debug_handler]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    state.render_service.render("index.html", &[]).await
}

#[axum::debug_handler]
pub async fn quiz(
    State(state): State<AppState>,
    Path(difficulty): Path<String>,
) -> Result<Html<String>> {
    // Deliberately not validated against the dataset: an unknown difficulty
    // still gets a page, and the frontend copes with an empty question list.
    state
        .render_service
        .render("quiz.html", &[("difficulty", difficulty)])
        .await
}

#[derive(Debug, Default, Deserialize)]
pub struct ResultParams {
    score: Option<String>,
    total: Option<String>,
}

fn count(raw: &Option<String>) -> u32 {
    raw.as_deref().and_then(|v| v.parse().ok()).unwrap_or(0)
}

#[axum::debug_handler]
pub async fn result(
    State(state): State<AppState>,
    Query(params): Query<ResultParams>,
) -> Result<Html<String>> {
    let score = count(&params.score);
    let total = count(&params.total);
    state
        .render_service
        .render(
            "result.html",
            &[("score", score.to_string()), ("total", total.to_string())],
        )
        .await
}
