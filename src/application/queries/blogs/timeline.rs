// src/application/queries/blogs/timeline.rs
use super::BlogQueryService;
use crate::{
    application::{
        dto::TimelineEntryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::blog::{BlogId, reconcile},
};

pub struct BlogTimelineQuery {
    pub blog_id: BlogId,
}

impl BlogQueryService {
    /// Reconciled conversation history for one blog: each version paired with
    /// the feedback recorded while it was the current version.
    pub async fn blog_timeline(
        &self,
        query: BlogTimelineQuery,
    ) -> ApplicationResult<Vec<TimelineEntryDto>> {
        self.blog_read_repo
            .find_by_id(query.blog_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("blog not found"))?;

        let versions = self.version_repo.list_for_blog(query.blog_id).await?;
        let feedback = self.feedback_repo.list_for_blog(query.blog_id).await?;

        let entries = reconcile(&versions, &feedback);
        Ok(entries.into_iter().map(Into::into).collect())
    }
}
