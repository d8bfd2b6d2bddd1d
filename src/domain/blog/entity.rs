// src/domain/blog/entity.rs
use chrono::{DateTime, Utc};

use crate::domain::blog::feedback::FeedbackEvent;
use crate::domain::blog::value_objects::{BlogId, BlogTopic};
use crate::domain::blog::version::Version;
use crate::domain::user::UserId;

/// A blog: a topic plus its append-only chain of generated versions.
#[derive(Debug, Clone)]
pub struct Blog {
    pub id: BlogId,
    pub topic: BlogTopic,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewBlog {
    pub id: BlogId,
    pub topic: BlogTopic,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Eagerly loaded aggregate for list queries: versions newest-first,
/// feedback newest-first.
#[derive(Debug, Clone)]
pub struct BlogWithHistory {
    pub blog: Blog,
    pub versions: Vec<Version>,
    pub feedback: Vec<FeedbackEvent>,
}
