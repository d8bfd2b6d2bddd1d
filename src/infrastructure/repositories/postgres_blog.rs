// src/infrastructure/repositories/postgres_blog.rs
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::map_sqlx;
use crate::domain::blog::{
    Blog, BlogId, BlogReadRepository, BlogTopic, BlogWithHistory, BlogWriteRepository,
    FeedbackEvent, FeedbackId, FeedbackPolarity, FeedbackRepository, NewBlog, NewFeedbackEvent,
    NewVersion, Version, VersionId, VersionRepository,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;

#[derive(Clone)]
pub struct PostgresBlogWriteRepository {
    pool: PgPool,
}

impl PostgresBlogWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresBlogReadRepository {
    pool: PgPool,
}

impl PostgresBlogReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresVersionRepository {
    pool: PgPool,
}

impl PostgresVersionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresFeedbackRepository {
    pool: PgPool,
}

impl PostgresFeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BlogRow {
    id: Uuid,
    topic: String,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
}

impl TryFrom<BlogRow> for Blog {
    type Error = DomainError;

    fn try_from(row: BlogRow) -> Result<Self, Self::Error> {
        Ok(Blog {
            id: BlogId::new(row.id),
            topic: BlogTopic::new(row.topic)?,
            owner_id: UserId::new(row.owner_id),
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct VersionRow {
    id: Uuid,
    blog_id: Uuid,
    content: String,
    user_prompt: Option<String>,
    ai_response: Option<String>,
    feedback_text: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<VersionRow> for Version {
    fn from(row: VersionRow) -> Self {
        Version {
            id: VersionId::new(row.id),
            blog_id: BlogId::new(row.blog_id),
            content: row.content,
            user_prompt: row.user_prompt,
            ai_response: row.ai_response,
            feedback_text: row.feedback_text,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct FeedbackRow {
    id: Uuid,
    blog_id: Uuid,
    content: String,
    polarity: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<FeedbackRow> for FeedbackEvent {
    type Error = DomainError;

    fn try_from(row: FeedbackRow) -> Result<Self, Self::Error> {
        Ok(FeedbackEvent {
            id: FeedbackId::new(row.id),
            blog_id: BlogId::new(row.blog_id),
            content: row.content,
            polarity: FeedbackPolarity::from_str(&row.polarity)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl BlogWriteRepository for PostgresBlogWriteRepository {
    async fn insert(&self, blog: NewBlog) -> DomainResult<Blog> {
        let row = sqlx::query_as::<_, BlogRow>(
            "INSERT INTO blogs (id, topic, owner_id, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, topic, owner_id, created_at",
        )
        .bind(blog.id.as_uuid())
        .bind(blog.topic.as_str())
        .bind(blog.owner_id.as_uuid())
        .bind(blog.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Blog::try_from(row)
    }
}

#[async_trait]
impl BlogReadRepository for PostgresBlogReadRepository {
    async fn find_by_id(&self, id: BlogId) -> DomainResult<Option<Blog>> {
        let row = sqlx::query_as::<_, BlogRow>(
            "SELECT id, topic, owner_id, created_at FROM blogs WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Blog::try_from).transpose()
    }

    async fn list_for_user(&self, owner_id: UserId) -> DomainResult<Vec<BlogWithHistory>> {
        let blog_rows = sqlx::query_as::<_, BlogRow>(
            "SELECT id, topic, owner_id, created_at FROM blogs
             WHERE owner_id = $1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let blogs = blog_rows
            .into_iter()
            .map(Blog::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let blog_ids: Vec<Uuid> = blogs.iter().map(|b| b.id.as_uuid()).collect();

        let version_rows = sqlx::query_as::<_, VersionRow>(
            "SELECT id, blog_id, content, user_prompt, ai_response, feedback_text, created_at
             FROM versions
             WHERE blog_id = ANY($1)
             ORDER BY created_at DESC, id DESC",
        )
        .bind(&blog_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let feedback_rows = sqlx::query_as::<_, FeedbackRow>(
            "SELECT id, blog_id, content, polarity, created_at
             FROM feedback_events
             WHERE blog_id = ANY($1)
             ORDER BY created_at DESC, id DESC",
        )
        .bind(&blog_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut versions: Vec<Version> = version_rows.into_iter().map(Into::into).collect();
        let feedback = feedback_rows
            .into_iter()
            .map(FeedbackEvent::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        // group per blog, preserving the DESC ordering from the queries
        let mut aggregates = Vec::with_capacity(blogs.len());
        for blog in blogs {
            let (own_versions, rest) = versions.into_iter().partition(|v| v.blog_id == blog.id);
            versions = rest;
            let own_feedback = feedback
                .iter()
                .filter(|f| f.blog_id == blog.id)
                .cloned()
                .collect();
            aggregates.push(BlogWithHistory {
                blog,
                versions: own_versions,
                feedback: own_feedback,
            });
        }

        Ok(aggregates)
    }
}

#[async_trait]
impl VersionRepository for PostgresVersionRepository {
    async fn append(&self, version: NewVersion) -> DomainResult<Version> {
        let row = sqlx::query_as::<_, VersionRow>(
            "INSERT INTO versions (id, blog_id, content, user_prompt, ai_response, feedback_text, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, blog_id, content, user_prompt, ai_response, feedback_text, created_at",
        )
        .bind(version.id.as_uuid())
        .bind(version.blog_id.as_uuid())
        .bind(&version.content)
        .bind(&version.user_prompt)
        .bind(&version.ai_response)
        .bind(&version.feedback_text)
        .bind(version.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn list_for_blog(&self, blog_id: BlogId) -> DomainResult<Vec<Version>> {
        let rows = sqlx::query_as::<_, VersionRow>(
            "SELECT id, blog_id, content, user_prompt, ai_response, feedback_text, created_at
             FROM versions
             WHERE blog_id = $1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(blog_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl FeedbackRepository for PostgresFeedbackRepository {
    async fn append(&self, event: NewFeedbackEvent) -> DomainResult<FeedbackEvent> {
        let row = sqlx::query_as::<_, FeedbackRow>(
            "INSERT INTO feedback_events (id, blog_id, content, polarity, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, blog_id, content, polarity, created_at",
        )
        .bind(event.id.as_uuid())
        .bind(event.blog_id.as_uuid())
        .bind(&event.content)
        .bind(event.polarity.as_str())
        .bind(event.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        FeedbackEvent::try_from(row)
    }

    async fn list_for_blog(&self, blog_id: BlogId) -> DomainResult<Vec<FeedbackEvent>> {
        let rows = sqlx::query_as::<_, FeedbackRow>(
            "SELECT id, blog_id, content, polarity, created_at
             FROM feedback_events
             WHERE blog_id = $1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(blog_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(FeedbackEvent::try_from).collect()
    }
}
