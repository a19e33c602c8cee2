use std::path::PathBuf;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

use quiz_backend::{config::Config, routes, AppState};

fn test_state() -> AppState {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        debug: false,
        quiz_data_path: PathBuf::from("static/data/quizzes.json"),
        templates_dir: PathBuf::from("templates"),
        static_dir: PathBuf::from("static"),
    };
    AppState::new(config)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String, String) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn index_renders_selection_page() {
    let (status, content_type, body) = get(routes::router(test_state()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(body.contains("けんぽうクイズ"));
    assert!(body.contains("/quiz/easy"));
}

#[tokio::test]
async fn quiz_page_binds_the_difficulty() {
    let (status, _, body) = get(routes::router(test_state()), "/quiz/easy").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"const DIFFICULTY = "easy";"#));
}

#[tokio::test]
async fn quiz_page_is_lenient_about_unknown_difficulties() {
    let (status, _, body) =
        get(routes::router(test_state()), "/quiz/nonexistent-difficulty").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"const DIFFICULTY = "nonexistent-difficulty";"#));
}

#[tokio::test]
async fn quiz_page_escapes_the_difficulty_parameter() {
    let (status, _, body) =
        get(routes::router(test_state()), "/quiz/%3Cscript%3Ehi%3C%2Fscript%3E").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"const DIFFICULTY = "&lt;script&gt;hi&lt;/script&gt;";"#));
}

#[tokio::test]
async fn result_page_reflects_score_and_total() {
    let (status, _, body) =
        get(routes::router(test_state()), "/result?score=7&total=10").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("10もん ちゅう 7もん せいかい！"));
}

#[tokio::test]
async fn result_page_defaults_missing_params_to_zero() {
    let (status, _, body) = get(routes::router(test_state()), "/result").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("0もん ちゅう 0もん せいかい！"));
}

#[tokio::test]
async fn result_page_defaults_unparsable_params_to_zero() {
    let (status, _, body) =
        get(routes::router(test_state()), "/result?score=seven&total=10").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("10もん ちゅう 0もん せいかい！"));
}

#[tokio::test]
async fn unknown_route_gets_the_generic_not_found_page() {
    let (status, content_type, body) =
        get(routes::router(test_state()), "/no/such/page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(body, "ページが見つかりません。");
}

#[tokio::test]
async fn render_failure_becomes_a_generic_500() {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        debug: false,
        quiz_data_path: PathBuf::from("static/data/quizzes.json"),
        templates_dir: PathBuf::from("/nonexistent-templates"),
        static_dir: PathBuf::from("static"),
    };
    let (status, _, body) = get(routes::router(AppState::new(config)), "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "エラーが発生しました。");
}
