// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{blogs::BlogCommandService, users::UserCommandService},
        ports::{generation::ContentGenerator, time::Clock},
        queries::blogs::BlogQueryService,
    },
    domain::{
        blog::{BlogReadRepository, BlogWriteRepository, FeedbackRepository, VersionRepository},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub blog_commands: Arc<BlogCommandService>,
    pub blog_queries: Arc<BlogQueryService>,
    pub user_commands: Arc<UserCommandService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        blog_write_repo: Arc<dyn BlogWriteRepository>,
        blog_read_repo: Arc<dyn BlogReadRepository>,
        version_repo: Arc<dyn VersionRepository>,
        feedback_repo: Arc<dyn FeedbackRepository>,
        generator: Arc<dyn ContentGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let blog_commands = Arc::new(BlogCommandService::new(
            Arc::clone(&blog_write_repo),
            Arc::clone(&blog_read_repo),
            Arc::clone(&version_repo),
            Arc::clone(&feedback_repo),
            Arc::clone(&user_repo),
            Arc::clone(&generator),
            Arc::clone(&clock),
        ));

        let blog_queries = Arc::new(BlogQueryService::new(
            Arc::clone(&blog_read_repo),
            Arc::clone(&version_repo),
            Arc::clone(&feedback_repo),
        ));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));

        Self {
            blog_commands,
            blog_queries,
            user_commands,
        }
    }
}
