// src/presentation/http/controllers/feedback.rs
use crate::application::commands::blogs::{ImproveContentCommand, SaveFeedbackCommand};
use crate::application::dto::FeedbackDto;
use crate::domain::blog::{BlogId, FeedbackPolarity};
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
pub struct SaveFeedbackRequest {
    pub blog_id: Uuid,
    pub content: String,
    #[serde(rename = "type")]
    pub polarity: FeedbackPolarity,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SaveFeedbackResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<FeedbackDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/feedback",
    request_body = SaveFeedbackRequest,
    responses(
        (status = 200, description = "Feedback recorded.", body = SaveFeedbackResponse),
        (status = 404, description = "Blog not found.", body = SaveFeedbackResponse),
        (status = 500, description = "Persistence failure.", body = SaveFeedbackResponse)
    ),
    tag = "Feedback"
)]
pub async fn save_feedback(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SaveFeedbackRequest>,
) -> Response {
    let command = SaveFeedbackCommand {
        blog_id: BlogId::new(payload.blog_id),
        content: payload.content,
        polarity: payload.polarity,
    };

    match state.services.blog_commands.save_feedback(command).await {
        Ok(feedback) => {
            let body = SaveFeedbackResponse {
                success: true,
                feedback: Some(feedback),
                error: None,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, blog_id = %payload.blog_id, "failed to save feedback");
            let body = SaveFeedbackResponse {
                success: false,
                feedback: None,
                error: Some(err.to_string()),
            };
            (status_for(&err), Json(body)).into_response()
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ImproveContentRequest {
    pub content: String,
    #[serde(rename = "type")]
    pub polarity: FeedbackPolarity,
    #[serde(default)]
    pub suggestion: Option<String>,
}

/// `improved_content` is null when the gate is not met (non-negative feedback
/// or no suggestion); the reaction is acknowledged without an editor pass.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ImproveContentResponse {
    pub improved_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/feedback/improve",
    request_body = ImproveContentRequest,
    responses(
        (status = 200, description = "Edited draft, or acknowledgement when the gate is not met.", body = ImproveContentResponse),
        (status = 500, description = "Generation failure.", body = ImproveContentResponse)
    ),
    tag = "Feedback"
)]
pub async fn improve_content(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ImproveContentRequest>,
) -> Response {
    let command = ImproveContentCommand {
        content: payload.content,
        polarity: payload.polarity,
        suggestion: payload.suggestion,
    };

    match state.services.blog_commands.improve_content(command).await {
        Ok(improved_content) => {
            let body = ImproveContentResponse {
                improved_content,
                error: None,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to improve content");
            let body = ImproveContentResponse {
                improved_content: None,
                error: Some(err.to_string()),
            };
            (status_for(&err), Json(body)).into_response()
        }
    }
}
