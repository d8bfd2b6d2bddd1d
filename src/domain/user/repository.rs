use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, User};
use crate::domain::user::value_objects::UserId;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: NewUser) -> DomainResult<User>;
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;
}
