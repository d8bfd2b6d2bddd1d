// src/application/commands/blogs/service.rs
use std::sync::Arc;

use crate::application::ports::generation::ContentGenerator;
use crate::application::ports::time::Clock;
use crate::domain::blog::{
    BlogReadRepository, BlogWriteRepository, FeedbackRepository, VersionRepository,
};
use crate::domain::user::UserRepository;

pub struct BlogCommandService {
    pub(super) blog_write_repo: Arc<dyn BlogWriteRepository>,
    pub(super) blog_read_repo: Arc<dyn BlogReadRepository>,
    pub(super) version_repo: Arc<dyn VersionRepository>,
    pub(super) feedback_repo: Arc<dyn FeedbackRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) generator: Arc<dyn ContentGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl BlogCommandService {
    pub fn new(
        blog_write_repo: Arc<dyn BlogWriteRepository>,
        blog_read_repo: Arc<dyn BlogReadRepository>,
        version_repo: Arc<dyn VersionRepository>,
        feedback_repo: Arc<dyn FeedbackRepository>,
        user_repo: Arc<dyn UserRepository>,
        generator: Arc<dyn ContentGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            blog_write_repo,
            blog_read_repo,
            version_repo,
            feedback_repo,
            user_repo,
            generator,
            clock,
        }
    }
}
