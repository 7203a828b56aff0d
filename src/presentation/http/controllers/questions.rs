// src/presentation/http/controllers/questions.rs
use crate::application::{
    commands::questions::CreateQuestionCommand,
    dto::QuestionDto,
    queries::questions::{GetQuestionBySlugQuery, ListQuestionsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuestionRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct QuestionListParams {
    #[serde(default)]
    pub limit: Option<u32>,
}

#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionRequest,
    responses(
        (status = 201, description = "Question created."),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Questions"
)]
pub async fn create_question(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateQuestionRequest>,
) -> HttpResult<StatusCode> {
    let command = CreateQuestionCommand {
        title: payload.title,
        content: payload.content,
    };

    state
        .services
        .question_commands
        .create_question(&user, command)
        .await
        .into_http()?;

    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    get,
    path = "/questions",
    params(("limit" = Option<u32>, Query, description = "Page size, clamped to 1..=100.")),
    responses(
        (status = 200, description = "Most recent questions.", body = [QuestionDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Questions"
)]
pub async fn list_questions(
    Extension(state): Extension<HttpState>,
    Query(params): Query<QuestionListParams>,
) -> HttpResult<Json<Vec<QuestionDto>>> {
    state
        .services
        .question_queries
        .list_questions(ListQuestionsQuery {
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/questions/{slug}",
    params(("slug" = String, Path, description = "Question slug.")),
    responses(
        (status = 200, description = "Question found.", body = QuestionDto),
        (status = 404, description = "No question with this slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Questions"
)]
pub async fn get_question_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<QuestionDto>> {
    state
        .services
        .question_queries
        .get_question_by_slug(GetQuestionBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}
