use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{EmailAddress, NewUser, PasswordHash, UserName},
};

pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let name = UserName::new(command.name)?;
        let email = EmailAddress::new(command.email)?;
        validate_password(&command.password)?;

        self.ensure_email_available(&email).await?;

        let user = self
            .create_and_insert_user(name, email, &command.password)
            .await?;

        Ok(user.into())
    }

    async fn ensure_email_available(&self, email: &EmailAddress) -> ApplicationResult<()> {
        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(ApplicationError::conflict("email already registered"));
        }

        Ok(())
    }

    // The availability check above races with concurrent registrations;
    // the unique constraint on users.email decides the winner and the
    // repository reports the loser as a conflict.
    async fn create_and_insert_user(
        &self,
        name: UserName,
        email: EmailAddress,
        password: &str,
    ) -> ApplicationResult<crate::domain::user::User> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let created_at = self.clock.now();
        let new_user = NewUser::new(name, email, password_hash, created_at);
        let user = self.user_repo.insert(new_user).await?;

        Ok(user)
    }
}
