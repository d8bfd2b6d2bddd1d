// src/application/queries/blogs/list.rs
use super::BlogQueryService;
use crate::{
    application::{dto::BlogWithHistoryDto, error::ApplicationResult},
    domain::user::UserId,
};

pub struct ListBlogsQuery {
    pub user_id: UserId,
}

impl BlogQueryService {
    /// Blogs owned by the user, newest-first, with versions and feedback
    /// eagerly loaded (both newest-first).
    pub async fn list_blogs(
        &self,
        query: ListBlogsQuery,
    ) -> ApplicationResult<Vec<BlogWithHistoryDto>> {
        let blogs = self.blog_read_repo.list_for_user(query.user_id).await?;
        Ok(blogs.into_iter().map(Into::into).collect())
    }
}
