// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{questions::QuestionCommandService, users::UserCommandService},
        dto::AuthenticatedUser,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::questions::QuestionQueryService,
    },
    domain::{
        question::{
            QuestionReadRepository, QuestionWriteRepository, services::QuestionSlugService,
        },
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub question_commands: Arc<QuestionCommandService>,
    pub question_queries: Arc<QuestionQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        question_write_repo: Arc<dyn QuestionWriteRepository>,
        question_read_repo: Arc<dyn QuestionReadRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));

        let slug_service = Arc::new(QuestionSlugService::new(
            Arc::clone(&question_read_repo),
            Arc::clone(&slugger),
        ));

        let question_commands = Arc::new(QuestionCommandService::new(
            Arc::clone(&question_write_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let question_queries = Arc::new(QuestionQueryService::new(Arc::clone(
            &question_read_repo,
        )));

        Self {
            user_commands,
            question_commands,
            question_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Authenticate a raw bearer token and return the caller's identity.
    ///
    /// Presentation-layer extractors delegate here so token handling stays
    /// behind the application boundary.
    pub async fn authenticate(
        &self,
        token: &str,
    ) -> crate::application::ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
