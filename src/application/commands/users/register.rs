// src/application/commands/users/register.rs
use super::UserCommandService;
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{DisplayName, NewUser, UserId},
};

/// Create the owner record the external auth layer references. Credentials and
/// sessions are not handled here.
pub struct RegisterUserCommand {
    pub display_name: String,
}

impl UserCommandService {
    pub async fn register_user(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let display_name = DisplayName::new(command.display_name)?;

        let user = self
            .user_repo
            .insert(NewUser {
                id: UserId::generate(),
                display_name,
                created_at: self.clock.now(),
            })
            .await?;

        Ok(user.into())
    }
}
