use axum::{http::StatusCode, routing::get, Router};

use crate::error::NOT_FOUND_PAGE;
use crate::AppState;

pub mod health;
pub mod pages;
pub mod quiz_api;

/// The full route table, shared by `main` and the integration tests so the
/// two cannot drift apart.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/quiz/:difficulty", get(pages::quiz))
        .route(
            "/api/quizzes/:difficulty",
            get(quiz_api::quizzes_by_difficulty),
        )
        .route("/result", get(pages::result))
        .route("/health", get(health::health))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_PAGE)
}
