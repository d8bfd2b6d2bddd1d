// src/application/queries/blogs/service.rs
use std::sync::Arc;

use crate::domain::blog::{BlogReadRepository, FeedbackRepository, VersionRepository};

pub struct BlogQueryService {
    pub(super) blog_read_repo: Arc<dyn BlogReadRepository>,
    pub(super) version_repo: Arc<dyn VersionRepository>,
    pub(super) feedback_repo: Arc<dyn FeedbackRepository>,
}

impl BlogQueryService {
    pub fn new(
        blog_read_repo: Arc<dyn BlogReadRepository>,
        version_repo: Arc<dyn VersionRepository>,
        feedback_repo: Arc<dyn FeedbackRepository>,
    ) -> Self {
        Self {
            blog_read_repo,
            version_repo,
            feedback_repo,
        }
    }
}
