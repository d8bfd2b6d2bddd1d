// src/presentation/http/controllers/versions.rs
use crate::application::commands::blogs::SaveVersionCommand;
use crate::application::dto::{BlogWithHistoryDto, VersionDto};
use crate::domain::blog::BlogId;
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
pub struct SaveVersionRequest {
    pub blog_id: Uuid,
    pub content: String,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub user_prompt: Option<String>,
    #[serde(default)]
    pub ai_response: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SaveVersionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<BlogWithHistoryDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/versions",
    request_body = SaveVersionRequest,
    responses(
        (status = 200, description = "Version appended; refreshed blog returned.", body = SaveVersionResponse),
        (status = 404, description = "Blog not found.", body = SaveVersionResponse),
        (status = 500, description = "Persistence failure.", body = SaveVersionResponse)
    ),
    tag = "Versions"
)]
pub async fn save_version(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SaveVersionRequest>,
) -> Response {
    let command = SaveVersionCommand {
        blog_id: BlogId::new(payload.blog_id),
        content: payload.content,
        feedback: payload.feedback,
        user_prompt: payload.user_prompt,
        ai_response: payload.ai_response,
    };

    match state.services.blog_commands.save_version(command).await {
        Ok((version, blog)) => {
            let body = SaveVersionResponse {
                success: true,
                version: Some(version),
                blog: Some(blog),
                error: None,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, blog_id = %payload.blog_id, "failed to save version");
            let body = SaveVersionResponse {
                success: false,
                version: None,
                blog: None,
                error: Some(err.to_string()),
            };
            (status_for(&err), Json(body)).into_response()
        }
    }
}
