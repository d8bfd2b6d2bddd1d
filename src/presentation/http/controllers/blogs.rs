// src/presentation/http/controllers/blogs.rs
use crate::application::{
    dto::{BlogWithHistoryDto, TimelineEntryDto},
    queries::blogs::{BlogTimelineQuery, ListBlogsQuery},
};
use crate::domain::blog::BlogId;
use crate::domain::user::UserId;
use crate::presentation::http::error::{HttpResult, IntoHttpResult, status_for};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct BlogListParams {
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

/// List response always carries a `blogs` array so the client can render
/// without branching; failures add an `error` string beside the empty list.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BlogListResponse {
    pub blogs: Vec<BlogWithHistoryDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/blogs",
    params(("user_id" = Uuid, Query, description = "Owner of the blogs to list.")),
    responses(
        (status = 200, description = "Blogs for the user, newest-first.", body = BlogListResponse),
        (status = 400, description = "Missing user id.", body = BlogListResponse),
        (status = 500, description = "Persistence failure.", body = BlogListResponse)
    ),
    tag = "Blogs"
)]
pub async fn list_blogs(
    Extension(state): Extension<HttpState>,
    Query(params): Query<BlogListParams>,
) -> Response {
    let Some(user_id) = params.user_id else {
        let body = BlogListResponse {
            blogs: Vec::new(),
            error: Some("user id is required".into()),
        };
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    };

    let result = state
        .services
        .blog_queries
        .list_blogs(ListBlogsQuery {
            user_id: UserId::new(user_id),
        })
        .await;

    match result {
        Ok(blogs) => (StatusCode::OK, Json(BlogListResponse { blogs, error: None })).into_response(),
        Err(err) => {
            tracing::error!(error = %err, %user_id, "failed to list blogs");
            let body = BlogListResponse {
                blogs: Vec::new(),
                error: Some(err.to_string()),
            };
            (status_for(&err), Json(body)).into_response()
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TimelineResponse {
    pub entries: Vec<TimelineEntryDto>,
}

#[utoipa::path(
    get,
    path = "/api/v1/blogs/{id}/timeline",
    params(("id" = Uuid, Path, description = "Blog identifier.")),
    responses(
        (status = 200, description = "Reconciled version/feedback timeline.", body = TimelineResponse),
        (status = 404, description = "Blog not found.")
    ),
    tag = "Blogs"
)]
pub async fn blog_timeline(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<TimelineResponse>> {
    state
        .services
        .blog_queries
        .blog_timeline(BlogTimelineQuery {
            blog_id: BlogId::new(id),
        })
        .await
        .into_http()
        .map(|entries| Json(TimelineResponse { entries }))
}
