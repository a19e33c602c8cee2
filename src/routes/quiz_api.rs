use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::error::{Error, Result};
use crate::models::question::Question;
use crate::AppState;

#[axum::debug_handler]
pub async fn quizzes_by_difficulty(
    State(state): State<AppState>,
    Path(difficulty): Path<String>,
) -> Result<Json<Vec<Question>>> {
    let dataset = state.quiz_service.load().await;
    match dataset.questions(&difficulty) {
        Some(questions) => Ok(Json(questions.to_vec())),
        None => Err(Error::NotFound(
            "指定された難易度のクイズは見つかりません。".to_string(),
        )),
    }
}
