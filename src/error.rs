use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

/// User-facing bodies for the generic failure pages. The app is Japanese,
/// so these stay localized like the rest of the frontend strings.
pub const NOT_FOUND_PAGE: &str = "ページが見つかりません。";
pub const INTERNAL_ERROR_PAGE: &str = "エラーが発生しました。";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        match self {
            // Lookup misses on the JSON API keep the structured error body
            // the frontend script expects.
            Error::NotFound(msg) => {
                let body = Json(json!({ "error": msg }));
                (StatusCode::NOT_FOUND, body).into_response()
            }
            // Everything else is an internal failure: log the detail, hand
            // the client the generic localized page.
            err => {
                tracing::error!("request failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_PAGE).into_response()
            }
        }
    }
}
