use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::blog::{
    Blog, BlogWithHistory, FeedbackEvent, FeedbackPolarity, TimelineEntry, Version,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BlogDto {
    pub id: Uuid,
    pub topic: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Blog> for BlogDto {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id.into(),
            topic: blog.topic.into(),
            owner_id: blog.owner_id.into(),
            created_at: blog.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VersionDto {
    pub id: Uuid,
    pub blog_id: Uuid,
    pub content: String,
    #[serde(default)]
    pub user_prompt: Option<String>,
    #[serde(default)]
    pub ai_response: Option<String>,
    #[serde(default)]
    pub feedback_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Version> for VersionDto {
    fn from(version: Version) -> Self {
        Self {
            id: version.id.into(),
            blog_id: version.blog_id.into(),
            content: version.content,
            user_prompt: version.user_prompt,
            ai_response: version.ai_response,
            feedback_text: version.feedback_text,
            created_at: version.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedbackDto {
    pub id: Uuid,
    pub blog_id: Uuid,
    pub content: String,
    #[serde(rename = "type")]
    pub polarity: FeedbackPolarity,
    pub created_at: DateTime<Utc>,
}

impl From<FeedbackEvent> for FeedbackDto {
    fn from(event: FeedbackEvent) -> Self {
        Self {
            id: event.id.into(),
            blog_id: event.blog_id.into(),
            content: event.content,
            polarity: event.polarity,
            created_at: event.created_at,
        }
    }
}

/// Blog with eagerly loaded history: versions and feedback newest-first.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BlogWithHistoryDto {
    pub id: Uuid,
    pub topic: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub versions: Vec<VersionDto>,
    pub feedback: Vec<FeedbackDto>,
}

impl From<BlogWithHistory> for BlogWithHistoryDto {
    fn from(aggregate: BlogWithHistory) -> Self {
        Self {
            id: aggregate.blog.id.into(),
            topic: aggregate.blog.topic.into(),
            owner_id: aggregate.blog.owner_id.into(),
            created_at: aggregate.blog.created_at,
            versions: aggregate.versions.into_iter().map(Into::into).collect(),
            feedback: aggregate.feedback.into_iter().map(Into::into).collect(),
        }
    }
}

/// One reconciled conversation step: a version plus the feedback recorded
/// while it was current.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimelineEntryDto {
    pub version: VersionDto,
    pub feedback: Vec<FeedbackDto>,
}

impl From<TimelineEntry> for TimelineEntryDto {
    fn from(entry: TimelineEntry) -> Self {
        Self {
            version: entry.version.into(),
            feedback: entry.feedback.into_iter().map(Into::into).collect(),
        }
    }
}
