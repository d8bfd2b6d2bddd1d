// src/presentation/http/controllers/generate.rs
use crate::application::commands::blogs::GenerateDraftCommand;
use crate::domain::blog::BlogId;
use crate::domain::user::UserId;
use crate::presentation::http::error::status_for;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateRequest {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub blog_id: Option<Uuid>,
}

/// Success carries the generated text and `error: null`; failures carry an
/// empty `content` and the upstream message, mirroring what the client shows
/// inline.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    pub content: String,
    pub error: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated draft.", body = GenerateResponse),
        (status = 400, description = "Missing user id or topic.", body = GenerateResponse),
        (status = 404, description = "Owner does not exist.", body = GenerateResponse),
        (status = 500, description = "Generation or persistence failure.", body = GenerateResponse)
    ),
    tag = "Generation"
)]
pub async fn generate(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<GenerateRequest>,
) -> Response {
    let Some(user_id) = payload.user_id else {
        let body = GenerateResponse {
            content: String::new(),
            error: Some("user id is required".into()),
        };
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    };

    let command = GenerateDraftCommand {
        user_id: UserId::new(user_id),
        topic: payload.topic,
        content: payload.content,
        feedback: payload.feedback,
        blog_id: payload.blog_id.map(BlogId::new),
    };

    match state.services.blog_commands.generate_draft(command).await {
        Ok(content) => {
            let body = GenerateResponse {
                content,
                error: None,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, %user_id, "draft generation failed");
            let body = GenerateResponse {
                content: String::new(),
                error: Some(err.to_string()),
            };
            (status_for(&err), Json(body)).into_response()
        }
    }
}
