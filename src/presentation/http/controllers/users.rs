// src/presentation/http/controllers/users.rs
use crate::application::commands::users::RegisterUserCommand;
use crate::application::dto::UserDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    pub display_name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterUserResponse {
    pub user: UserDto,
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "Owner record created.", body = RegisterUserResponse),
        (status = 400, description = "Invalid display name.")
    ),
    tag = "Users"
)]
pub async fn register_user(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterUserRequest>,
) -> HttpResult<(StatusCode, Json<RegisterUserResponse>)> {
    state
        .services
        .user_commands
        .register_user(RegisterUserCommand {
            display_name: payload.display_name,
        })
        .await
        .into_http()
        .map(|user| (StatusCode::CREATED, Json(RegisterUserResponse { user })))
}
