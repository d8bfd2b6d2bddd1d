// src/domain/blog/version.rs
use chrono::{DateTime, Utc};

use crate::domain::blog::value_objects::{BlogId, VersionId};

/// One immutable snapshot of a blog's content. Written once on generation or
/// feedback-driven regeneration, never updated or deleted.
///
/// `feedback_text` is a denormalized display convenience; the corresponding
/// `FeedbackEvent` record stays authoritative.
#[derive(Debug, Clone)]
pub struct Version {
    pub id: VersionId,
    pub blog_id: BlogId,
    pub content: String,
    pub user_prompt: Option<String>,
    pub ai_response: Option<String>,
    pub feedback_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewVersion {
    pub id: VersionId,
    pub blog_id: BlogId,
    pub content: String,
    pub user_prompt: Option<String>,
    pub ai_response: Option<String>,
    pub feedback_text: Option<String>,
    pub created_at: DateTime<Utc>,
}
