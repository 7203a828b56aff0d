// tests/support/helpers.rs
use std::sync::Arc;
use super::mocks as mocks;
use axum::body;
use axum::http::StatusCode;
use serde_json::Value;

pub async fn build_test_state() -> toiita_core::presentation::http::state::HttpState {
    // One repo serves both sides so reads observe writes
    let question_repo = Arc::new(mocks::InMemoryQuestionRepo::new());
    build_test_state_with_question_repos(question_repo.clone(), question_repo).await
}

/// Build the application state with mocks, injecting the question repositories.
pub async fn build_test_state_with_question_repos(
    question_write: Arc<dyn toiita_core::domain::question::repository::QuestionWriteRepository>,
    question_read: Arc<dyn toiita_core::domain::question::repository::QuestionReadRepository>,
) -> toiita_core::presentation::http::state::HttpState {
    let user_repo: Arc<dyn toiita_core::domain::user::repository::UserRepository> = Arc::new(mocks::InMemoryUserRepo::new());
    let password_hasher: Arc<dyn toiita_core::application::ports::security::PasswordHasher> = Arc::new(mocks::StrictPasswordHasher);
    let token_manager: Arc<dyn toiita_core::application::ports::security::TokenManager> = Arc::new(mocks::DummyTokenManager);
    let clock: Arc<dyn toiita_core::application::ports::time::Clock> = Arc::new(mocks::DummyClock);
    let slugger: Arc<dyn toiita_core::application::ports::util::SlugGenerator> = Arc::new(toiita_core::infrastructure::util::DefaultSlugGenerator);

    let services = Arc::new(toiita_core::application::services::ApplicationServices::new(
        user_repo,
        question_write,
        question_read,
        password_hasher,
        token_manager,
        clock,
        slugger,
    ));

    // PgPool: use lazy connect string so tests don't actually connect
    use sqlx::postgres::PgPoolOptions;
    let db_pool = PgPoolOptions::new().connect_lazy("postgres://localhost").expect("connect_lazy");

    toiita_core::presentation::http::state::HttpState { services, db_pool }
}

pub async fn make_test_router() -> axum::Router {
    let state = build_test_state().await;
    toiita_core::presentation::http::routes::build_router_with_rate_limiter(state, false)
}

/// Build a test router but inject custom question repositories (useful for E2E tests).
pub async fn make_test_router_with_question_repos(
    question_write: Arc<dyn toiita_core::domain::question::repository::QuestionWriteRepository>,
    question_read: Arc<dyn toiita_core::domain::question::repository::QuestionReadRepository>,
) -> axum::Router {
    let state = build_test_state_with_question_repos(question_write, question_read).await;
    toiita_core::presentation::http::routes::build_router_with_rate_limiter(state, false)
}

/// Read a response body as JSON, returning the head alongside it.
pub async fn read_json(resp: axum::response::Response) -> (axum::http::response::Parts, Value) {
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body");
    (parts, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: axum::response::Response, expected_status: StatusCode, expected_error: &str) {
    // Check status first
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts.headers.get("content-type").and_then(|v| v.to_str().ok()).unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
