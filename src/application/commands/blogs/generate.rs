// src/application/commands/blogs/generate.rs
use super::BlogCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::generation::ChatMessage,
    },
    domain::blog::{BlogId, BlogTopic, NewBlog, NewVersion, Version, VersionId},
    domain::user::UserId,
};

const SYSTEM_INSTRUCTION: &str = "You are a professional blog post writer. Write a \
well-structured, engaging blog post about the given topic. When asked to improve, \
maintain the overall structure while incorporating the requested changes.";

/// Generate a first draft or a feedback-driven revision.
///
/// Three shapes, matching what gets persisted:
/// - no `blog_id`: generate from `topic`, create one blog with one version;
/// - `blog_id` + `feedback`: regenerate from `content`, append one version;
/// - `blog_id` without `feedback`: regenerate a preview, persist nothing.
pub struct GenerateDraftCommand {
    pub user_id: UserId,
    pub topic: Option<String>,
    pub content: Option<String>,
    pub feedback: Option<String>,
    pub blog_id: Option<BlogId>,
}

impl BlogCommandService {
    pub async fn generate_draft(&self, command: GenerateDraftCommand) -> ApplicationResult<String> {
        let user = self
            .user_repo
            .find_by_id(command.user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        if command.blog_id.is_none() && non_blank(command.topic.as_deref()).is_none() {
            return Err(ApplicationError::validation(
                "topic is required when creating a blog",
            ));
        }

        let history = match command.blog_id {
            Some(blog_id) => self.conversation_history(blog_id).await?,
            None => Vec::new(),
        };

        let prompt = build_prompt(&command)?;

        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage::system(SYSTEM_INSTRUCTION));
        messages.extend(history);
        messages.push(ChatMessage::user(prompt.clone()));

        let generated = self.generator.generate(&messages).await?;

        match (command.blog_id, command.feedback) {
            (Some(blog_id), Some(feedback)) => {
                self.append_revision(blog_id, &generated, &prompt, feedback)
                    .await?;
            }
            (None, _) => {
                // topic presence was checked when the prompt was built
                let topic = command.topic.unwrap_or_default();
                self.create_blog_with_initial_version(user.id, topic, &generated, &prompt)
                    .await?;
            }
            // regeneration preview for an existing blog: nothing persisted
            (Some(_), None) => {}
        }

        Ok(generated)
    }

    /// Prior turns for the blog, oldest-first, replayed as user/assistant pairs.
    async fn conversation_history(&self, blog_id: BlogId) -> ApplicationResult<Vec<ChatMessage>> {
        let mut versions = self.version_repo.list_for_blog(blog_id).await?;
        versions.reverse();

        let mut turns = Vec::with_capacity(versions.len() * 2);
        for version in versions {
            let Version {
                content,
                user_prompt,
                ai_response,
                ..
            } = version;
            turns.push(ChatMessage::user(user_prompt.unwrap_or_default()));
            turns.push(ChatMessage::assistant(ai_response.unwrap_or(content)));
        }
        Ok(turns)
    }

    async fn append_revision(
        &self,
        blog_id: BlogId,
        generated: &str,
        prompt: &str,
        feedback: String,
    ) -> ApplicationResult<()> {
        self.blog_read_repo
            .find_by_id(blog_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("blog not found"))?;

        self.version_repo
            .append(NewVersion {
                id: VersionId::generate(),
                blog_id,
                content: generated.to_string(),
                user_prompt: Some(prompt.to_string()),
                ai_response: Some(generated.to_string()),
                feedback_text: Some(feedback),
                created_at: self.clock.now(),
            })
            .await?;
        Ok(())
    }

    async fn create_blog_with_initial_version(
        &self,
        owner_id: UserId,
        topic: String,
        generated: &str,
        prompt: &str,
    ) -> ApplicationResult<()> {
        let now = self.clock.now();
        let blog = self
            .blog_write_repo
            .insert(NewBlog {
                id: BlogId::generate(),
                topic: BlogTopic::new(topic)?,
                owner_id,
                created_at: now,
            })
            .await?;

        self.version_repo
            .append(NewVersion {
                id: VersionId::generate(),
                blog_id: blog.id,
                content: generated.to_string(),
                user_prompt: Some(prompt.to_string()),
                ai_response: Some(generated.to_string()),
                feedback_text: None,
                created_at: now,
            })
            .await?;
        Ok(())
    }
}

fn build_prompt(command: &GenerateDraftCommand) -> ApplicationResult<String> {
    if let Some(feedback) = &command.feedback {
        let content = command.content.as_deref().ok_or_else(|| {
            ApplicationError::validation("content is required when feedback is given")
        })?;
        return Ok(format!(
            "Improve this blog post based on the feedback: {feedback}\n\nOriginal post: {content}"
        ));
    }

    let topic = non_blank(command.topic.as_deref())
        .ok_or_else(|| ApplicationError::validation("topic is required"))?;
    Ok(format!("Write a blog post about: {topic}"))
}

pub(super) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
