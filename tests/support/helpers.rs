// tests/support/helpers.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use draftforge::application::ports::{generation::ContentGenerator, time::Clock};
use draftforge::application::services::ApplicationServices;
use draftforge::domain::blog::{
    Blog, BlogId, BlogReadRepository, BlogTopic, BlogWriteRepository, FeedbackEvent, FeedbackId,
    FeedbackPolarity, FeedbackRepository, Version, VersionId, VersionRepository,
};
use draftforge::domain::user::{DisplayName, User, UserId, UserRepository};
use draftforge::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::{self, InMemoryBlogStore, InMemoryUserRepo, StubGenerator};

pub struct TestEnv {
    pub store: Arc<InMemoryBlogStore>,
    pub users: Arc<InMemoryUserRepo>,
    pub generator: Arc<StubGenerator>,
    pub services: Arc<ApplicationServices>,
}

pub fn build_env_with(
    users: InMemoryUserRepo,
    generator: StubGenerator,
    clock: Arc<dyn Clock>,
) -> TestEnv {
    let store = Arc::new(InMemoryBlogStore::default());
    let users = Arc::new(users);
    let generator = Arc::new(generator);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&users) as Arc<dyn UserRepository>,
        Arc::clone(&store) as Arc<dyn BlogWriteRepository>,
        Arc::clone(&store) as Arc<dyn BlogReadRepository>,
        Arc::clone(&store) as Arc<dyn VersionRepository>,
        Arc::clone(&store) as Arc<dyn FeedbackRepository>,
        Arc::clone(&generator) as Arc<dyn ContentGenerator>,
        clock,
    ));

    TestEnv {
        store,
        users,
        generator,
        services,
    }
}

/// Environment whose generator always fails, for upstream-error paths.
pub fn build_failing_env(
    users: InMemoryUserRepo,
) -> (Arc<InMemoryBlogStore>, Arc<ApplicationServices>) {
    let store = Arc::new(InMemoryBlogStore::default());

    let services = Arc::new(ApplicationServices::new(
        Arc::new(users) as Arc<dyn UserRepository>,
        Arc::clone(&store) as Arc<dyn BlogWriteRepository>,
        Arc::clone(&store) as Arc<dyn BlogReadRepository>,
        Arc::clone(&store) as Arc<dyn VersionRepository>,
        Arc::clone(&store) as Arc<dyn FeedbackRepository>,
        Arc::new(mocks::FailingGenerator) as Arc<dyn ContentGenerator>,
        Arc::new(mocks::SteppingClock::new()),
    ));

    (store, services)
}

pub fn build_env() -> TestEnv {
    build_env_with(
        InMemoryUserRepo::default(),
        StubGenerator::replying("generated content"),
        Arc::new(mocks::SteppingClock::new()),
    )
}

pub const TEST_ORIGIN: &str = "http://localhost:3000";

pub fn make_router(env: &TestEnv) -> axum::Router {
    build_router(
        HttpState {
            services: Arc::clone(&env.services),
        },
        &[TEST_ORIGIN.to_string()],
    )
}

/* ------------------------------ builders ------------------------------- */

pub fn sample_user(name: &str) -> User {
    User {
        id: UserId::generate(),
        display_name: DisplayName::new(name).unwrap(),
        created_at: mocks::fixed_now(),
    }
}

pub fn sample_blog(owner_id: UserId, topic: &str, created_at: DateTime<Utc>) -> Blog {
    Blog {
        id: BlogId::generate(),
        topic: BlogTopic::new(topic).unwrap(),
        owner_id,
        created_at,
    }
}

pub fn sample_version(blog_id: BlogId, content: &str, created_at: DateTime<Utc>) -> Version {
    Version {
        id: VersionId::generate(),
        blog_id,
        content: content.to_string(),
        user_prompt: Some(format!("Write a blog post about: {content}")),
        ai_response: Some(content.to_string()),
        feedback_text: None,
        created_at,
    }
}

pub fn sample_feedback(
    blog_id: BlogId,
    content: &str,
    polarity: FeedbackPolarity,
    created_at: DateTime<Utc>,
) -> FeedbackEvent {
    FeedbackEvent {
        id: FeedbackId::generate(),
        blog_id,
        content: content.to_string(),
        polarity,
        created_at,
    }
}
