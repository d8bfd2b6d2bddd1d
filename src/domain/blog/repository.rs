use async_trait::async_trait;

use crate::domain::blog::entity::{Blog, BlogWithHistory, NewBlog};
use crate::domain::blog::feedback::{FeedbackEvent, NewFeedbackEvent};
use crate::domain::blog::value_objects::BlogId;
use crate::domain::blog::version::{NewVersion, Version};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;

#[async_trait]
pub trait BlogWriteRepository: Send + Sync {
    async fn insert(&self, blog: NewBlog) -> DomainResult<Blog>;
}

#[async_trait]
pub trait BlogReadRepository: Send + Sync {
    async fn find_by_id(&self, id: BlogId) -> DomainResult<Option<Blog>>;
    /// Blogs for one owner, created-at descending, with versions and feedback
    /// eagerly loaded (both newest-first).
    async fn list_for_user(&self, owner_id: UserId) -> DomainResult<Vec<BlogWithHistory>>;
}

#[async_trait]
pub trait VersionRepository: Send + Sync {
    async fn append(&self, version: NewVersion) -> DomainResult<Version>;
    /// Versions for a blog, newest-first.
    async fn list_for_blog(&self, blog_id: BlogId) -> DomainResult<Vec<Version>>;
}

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn append(&self, event: NewFeedbackEvent) -> DomainResult<FeedbackEvent>;
    /// Feedback for a blog, newest-first.
    async fn list_for_blog(&self, blog_id: BlogId) -> DomainResult<Vec<FeedbackEvent>>;
}
