// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{blogs, feedback, generate, users, versions},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allow_origin(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/users", post(users::register_user))
        .route("/api/v1/blogs", get(blogs::list_blogs))
        .route("/api/v1/blogs/{id}/timeline", get(blogs::blog_timeline))
        .route("/api/v1/generate", post(generate::generate))
        .route("/api/v1/feedback", post(feedback::save_feedback))
        .route("/api/v1/feedback/improve", post(feedback::improve_content))
        .route("/api/v1/versions", post(versions::save_version))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

// "*" anywhere in the list opens the API up; otherwise only the origins that
// parse as header values are allowed.
fn allow_origin(allowed_origins: &[String]) -> AllowOrigin {
    if allowed_origins.iter().any(|origin| origin == "*") {
        return AllowOrigin::any();
    }
    AllowOrigin::list(
        allowed_origins
            .iter()
            .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
    )
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
