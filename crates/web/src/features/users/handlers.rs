use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{progress::ProgressFilter, user::CreateUserRequest},
    models::{User, UserProgress},
};

use crate::error::WebError;
use crate::extract::{ApiPath, ApiQuery, ValidatedJson};

use super::services;

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User registered", body = User),
        (status = 400, description = "User already registered or invalid body")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(db): State<Database>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<Response, WebError> {
    let user = services::create_user(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(user)).into_response())
}

#[utoipa::path(
    get,
    path = "/users/{telegram_id}",
    params(
        ("telegram_id" = String, Path, description = "Telegram account id")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn get_user(
    State(db): State<Database>,
    ApiPath(telegram_id): ApiPath<String>,
) -> Result<Response, WebError> {
    let user = services::get_user_by_telegram_id(db.pool(), &telegram_id).await?;

    Ok(Json(user).into_response())
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/progress",
    params(
        ("user_id" = i64, Path, description = "User id"),
        ProgressFilter
    ),
    responses(
        (status = 200, description = "Progress records of the user", body = Vec<UserProgress>),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn list_user_progress(
    State(db): State<Database>,
    ApiPath(user_id): ApiPath<i64>,
    ApiQuery(filter): ApiQuery<ProgressFilter>,
) -> Result<Response, WebError> {
    let progress = services::list_user_progress(db.pool(), user_id, filter.program_id).await?;

    Ok(Json(progress).into_response())
}
