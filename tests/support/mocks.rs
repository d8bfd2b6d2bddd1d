// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use draftforge::application::error::{ApplicationError, ApplicationResult};
use draftforge::application::ports::generation::{ChatMessage, ContentGenerator};
use draftforge::application::ports::time::Clock;
use draftforge::domain::blog::{
    Blog, BlogId, BlogReadRepository, BlogWithHistory, BlogWriteRepository, FeedbackEvent,
    FeedbackRepository, NewBlog, NewFeedbackEvent, NewVersion, Version, VersionRepository,
};
use draftforge::domain::errors::{DomainError, DomainResult};
use draftforge::domain::user::{NewUser, User, UserId, UserRepository};

/* -------------------------------- clock -------------------------------- */

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Deterministic clock pinned to a single instant.
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Clock that advances one second per call, for ordering-sensitive tests.
pub struct SteppingClock {
    base: DateTime<Utc>,
    ticks: Mutex<i64>,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            base: fixed_now(),
            ticks: Mutex::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut ticks = self.ticks.lock().unwrap();
        let now = self.base + Duration::seconds(*ticks);
        *ticks += 1;
        now
    }
}

/* ------------------------------ generator ------------------------------ */

/// Generator stub that records every message sequence it was called with.
pub struct StubGenerator {
    pub reply: String,
    pub calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl StubGenerator {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ContentGenerator for StubGenerator {
    async fn generate(&self, messages: &[ChatMessage]) -> ApplicationResult<String> {
        self.calls.lock().unwrap().push(messages.to_vec());
        Ok(self.reply.clone())
    }
}

pub struct FailingGenerator;

#[async_trait]
impl ContentGenerator for FailingGenerator {
    async fn generate(&self, _messages: &[ChatMessage]) -> ApplicationResult<String> {
        Err(ApplicationError::upstream("model unavailable"))
    }
}

/* ------------------------------ user repo ------------------------------ */

#[derive(Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepo {
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let map = users.into_iter().map(|u| (u.id.as_uuid(), u)).collect();
        Self {
            inner: Mutex::new(map),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, user: NewUser) -> DomainResult<User> {
        let created = User {
            id: user.id,
            display_name: user.display_name,
            created_at: user.created_at,
        };
        self.inner
            .lock()
            .unwrap()
            .insert(created.id.as_uuid(), created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.inner.lock().unwrap().get(&id.as_uuid()).cloned())
    }
}

/* ------------------------------ blog store ----------------------------- */

/// One in-memory store backing all four blog repository traits, so tests can
/// assert exactly what got persisted.
#[derive(Default)]
pub struct InMemoryBlogStore {
    pub blogs: Mutex<Vec<Blog>>,
    pub versions: Mutex<Vec<Version>>,
    pub feedback: Mutex<Vec<FeedbackEvent>>,
}

impl InMemoryBlogStore {
    pub fn blog_count(&self) -> usize {
        self.blogs.lock().unwrap().len()
    }

    pub fn version_count(&self) -> usize {
        self.versions.lock().unwrap().len()
    }

    fn versions_for(&self, blog_id: BlogId) -> Vec<Version> {
        let mut versions: Vec<Version> = self
            .versions
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.blog_id == blog_id)
            .cloned()
            .collect();
        // newest-first; ties resolve to latest-inserted first
        versions.reverse();
        versions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        versions
    }

    fn feedback_for(&self, blog_id: BlogId) -> Vec<FeedbackEvent> {
        let mut feedback: Vec<FeedbackEvent> = self
            .feedback
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.blog_id == blog_id)
            .cloned()
            .collect();
        feedback.reverse();
        feedback.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        feedback
    }
}

#[async_trait]
impl BlogWriteRepository for InMemoryBlogStore {
    async fn insert(&self, blog: NewBlog) -> DomainResult<Blog> {
        let created = Blog {
            id: blog.id,
            topic: blog.topic,
            owner_id: blog.owner_id,
            created_at: blog.created_at,
        };
        self.blogs.lock().unwrap().push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl BlogReadRepository for InMemoryBlogStore {
    async fn find_by_id(&self, id: BlogId) -> DomainResult<Option<Blog>> {
        Ok(self
            .blogs
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn list_for_user(&self, owner_id: UserId) -> DomainResult<Vec<BlogWithHistory>> {
        let mut blogs: Vec<Blog> = self
            .blogs
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.owner_id == owner_id)
            .cloned()
            .collect();
        blogs.reverse();
        blogs.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(blogs
            .into_iter()
            .map(|blog| {
                let versions = self.versions_for(blog.id);
                let feedback = self.feedback_for(blog.id);
                BlogWithHistory {
                    blog,
                    versions,
                    feedback,
                }
            })
            .collect())
    }
}

#[async_trait]
impl VersionRepository for InMemoryBlogStore {
    async fn append(&self, version: NewVersion) -> DomainResult<Version> {
        let created = Version {
            id: version.id,
            blog_id: version.blog_id,
            content: version.content,
            user_prompt: version.user_prompt,
            ai_response: version.ai_response,
            feedback_text: version.feedback_text,
            created_at: version.created_at,
        };
        self.versions.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn list_for_blog(&self, blog_id: BlogId) -> DomainResult<Vec<Version>> {
        Ok(self.versions_for(blog_id))
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryBlogStore {
    async fn append(&self, event: NewFeedbackEvent) -> DomainResult<FeedbackEvent> {
        let created = FeedbackEvent {
            id: event.id,
            blog_id: event.blog_id,
            content: event.content,
            polarity: event.polarity,
            created_at: event.created_at,
        };
        self.feedback.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn list_for_blog(&self, blog_id: BlogId) -> DomainResult<Vec<FeedbackEvent>> {
        Ok(self.feedback_for(blog_id))
    }
}

/* --------------------------- failing read repo -------------------------- */

/// Read repository that always fails, for exercising the error envelopes.
pub struct FailingBlogRead;

#[async_trait]
impl BlogReadRepository for FailingBlogRead {
    async fn find_by_id(&self, _id: BlogId) -> DomainResult<Option<Blog>> {
        Err(DomainError::Persistence("database unavailable".into()))
    }

    async fn list_for_user(&self, _owner_id: UserId) -> DomainResult<Vec<BlogWithHistory>> {
        Err(DomainError::Persistence("database unavailable".into()))
    }
}
