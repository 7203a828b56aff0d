// src/presentation/http/controllers/sessions.rs
use crate::application::{commands::users::LoginUserCommand, dto::AccessTokenDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/sessions",
    request_body = LoginRequest,
    responses(
        (status = 201, description = "Session established.", body = AccessTokenDto),
        (status = 401, description = "Invalid credentials.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many attempts.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Sessions"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<(StatusCode, Json<AccessTokenDto>)> {
    let command = LoginUserCommand {
        email: payload.email,
        password: payload.password,
    };

    let token = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(token)))
}
