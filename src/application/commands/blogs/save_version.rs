// src/application/commands/blogs/save_version.rs
use super::BlogCommandService;
use crate::{
    application::{
        dto::{BlogWithHistoryDto, VersionDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::blog::{BlogId, NewVersion, VersionId},
};

pub struct SaveVersionCommand {
    pub blog_id: BlogId,
    pub content: String,
    pub feedback: Option<String>,
    pub user_prompt: Option<String>,
    pub ai_response: Option<String>,
}

impl BlogCommandService {
    /// Append one version to an existing blog and return it together with the
    /// refreshed blog history (versions newest-first).
    pub async fn save_version(
        &self,
        command: SaveVersionCommand,
    ) -> ApplicationResult<(VersionDto, BlogWithHistoryDto)> {
        let blog = self
            .blog_read_repo
            .find_by_id(command.blog_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("blog not found"))?;

        let version = self
            .version_repo
            .append(NewVersion {
                id: VersionId::generate(),
                blog_id: command.blog_id,
                content: command.content,
                user_prompt: command.user_prompt,
                ai_response: command.ai_response,
                feedback_text: command.feedback,
                created_at: self.clock.now(),
            })
            .await?;

        let versions = self.version_repo.list_for_blog(command.blog_id).await?;
        let feedback = self.feedback_repo.list_for_blog(command.blog_id).await?;

        let refreshed = crate::domain::blog::BlogWithHistory {
            blog,
            versions,
            feedback,
        };

        Ok((version.into(), refreshed.into()))
    }
}
