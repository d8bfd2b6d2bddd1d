// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::dto::{
    BlogDto, BlogWithHistoryDto, FeedbackDto, TimelineEntryDto, UserDto, VersionDto,
};
use crate::domain::blog::FeedbackPolarity;
use crate::presentation::http::controllers::{
    blogs::{BlogListResponse, TimelineResponse},
    feedback::{
        ImproveContentRequest, ImproveContentResponse, SaveFeedbackRequest, SaveFeedbackResponse,
    },
    generate::{GenerateRequest, GenerateResponse},
    users::{RegisterUserRequest, RegisterUserResponse},
    versions::{SaveVersionRequest, SaveVersionResponse},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "draftforge",
        description = "Iterative AI blog-drafting API: generate drafts, collect feedback, browse version history."
    ),
    paths(
        crate::presentation::http::routes::health,
        crate::presentation::http::controllers::blogs::list_blogs,
        crate::presentation::http::controllers::blogs::blog_timeline,
        crate::presentation::http::controllers::generate::generate,
        crate::presentation::http::controllers::feedback::save_feedback,
        crate::presentation::http::controllers::feedback::improve_content,
        crate::presentation::http::controllers::versions::save_version,
        crate::presentation::http::controllers::users::register_user,
    ),
    components(schemas(
        StatusResponse,
        BlogDto,
        BlogWithHistoryDto,
        VersionDto,
        FeedbackDto,
        FeedbackPolarity,
        TimelineEntryDto,
        UserDto,
        BlogListResponse,
        TimelineResponse,
        GenerateRequest,
        GenerateResponse,
        SaveFeedbackRequest,
        SaveFeedbackResponse,
        ImproveContentRequest,
        ImproveContentResponse,
        SaveVersionRequest,
        SaveVersionResponse,
        RegisterUserRequest,
        RegisterUserResponse,
    ))
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()).into()
}
