// src/application/commands/blogs/save_feedback.rs
use super::BlogCommandService;
use crate::{
    application::{
        dto::FeedbackDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::blog::{BlogId, FeedbackId, FeedbackPolarity, NewFeedbackEvent},
};

pub struct SaveFeedbackCommand {
    pub blog_id: BlogId,
    pub content: String,
    pub polarity: FeedbackPolarity,
}

impl BlogCommandService {
    /// Record one feedback event, stamped with the server clock. Append-only.
    pub async fn save_feedback(
        &self,
        command: SaveFeedbackCommand,
    ) -> ApplicationResult<FeedbackDto> {
        if command.content.trim().is_empty() {
            return Err(ApplicationError::validation(
                "feedback content cannot be empty",
            ));
        }

        self.blog_read_repo
            .find_by_id(command.blog_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("blog not found"))?;

        let event = self
            .feedback_repo
            .append(NewFeedbackEvent {
                id: FeedbackId::generate(),
                blog_id: command.blog_id,
                content: command.content,
                polarity: command.polarity,
                created_at: self.clock.now(),
            })
            .await?;

        Ok(event.into())
    }
}
