use super::UserCommandService;
use crate::{
    application::{
        dto::{AccessTokenDto, TokenSubject},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::EmailAddress,
};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<AccessTokenDto> {
        let email = EmailAddress::new(command.email)
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;

        let user = self.find_and_authenticate_user(&email, &command.password).await?;

        let subject = TokenSubject { user_id: user.id };
        self.token_manager.issue(subject).await
    }

    // Unknown email and wrong password answer identically so the endpoint
    // does not reveal which emails are registered.
    async fn find_and_authenticate_user(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> ApplicationResult<crate::domain::user::User> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        Ok(user)
    }
}
