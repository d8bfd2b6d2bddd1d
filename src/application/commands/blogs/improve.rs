// src/application/commands/blogs/improve.rs
use super::BlogCommandService;
use super::generate::non_blank;
use crate::{
    application::{error::ApplicationResult, ports::generation::ChatMessage},
    domain::blog::FeedbackPolarity,
};

const EDITOR_INSTRUCTION: &str = "You are a professional blog post editor. Improve the \
content based on user feedback while maintaining the original topic and structure.";

/// Rework a draft from a reader's improvement suggestion, without touching any
/// stored blog. Only negative feedback with a non-blank suggestion triggers the
/// editor; anything else is acknowledged and returns no content.
pub struct ImproveContentCommand {
    pub content: String,
    pub polarity: FeedbackPolarity,
    pub suggestion: Option<String>,
}

impl BlogCommandService {
    pub async fn improve_content(
        &self,
        command: ImproveContentCommand,
    ) -> ApplicationResult<Option<String>> {
        let suggestion = match (command.polarity, non_blank(command.suggestion.as_deref())) {
            (FeedbackPolarity::Negative, Some(suggestion)) => suggestion,
            _ => return Ok(None),
        };

        let messages = [
            ChatMessage::system(EDITOR_INSTRUCTION),
            ChatMessage::user(format!(
                "Original blog post: {content}\n\nUser feedback: {suggestion}\n\n\
                 Please improve this blog post based on the feedback.",
                content = command.content,
            )),
        ];

        let improved = self.generator.generate(&messages).await?;
        Ok(Some(improved))
    }
}
