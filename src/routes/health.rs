use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::models::dataset::QuizDataset;
use crate::AppState;

#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let body = match state.quiz_service.try_load().await {
        Ok(dataset) => json!({
            "status": "healthy",
            "dataset_loaded": true,
            "difficulties": dataset.difficulties(),
        }),
        Err(_) => json!({
            "status": "healthy",
            "dataset_loaded": false,
            "difficulties": QuizDataset::fallback().difficulties(),
        }),
    };
    (StatusCode::OK, Json(body))
}
