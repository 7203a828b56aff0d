// src/application/commands/questions/create.rs
use super::QuestionCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, QuestionDto},
        error::ApplicationResult,
    },
    domain::question::{NewQuestion, QuestionContent, QuestionTitle},
};

pub struct CreateQuestionCommand {
    pub title: String,
    pub content: String,
}

impl QuestionCommandService {
    /// Validates the payload, derives a unique slug from the title, and
    /// stores the question. The author is always the authenticated caller.
    pub async fn create_question(
        &self,
        actor: &AuthenticatedUser,
        command: CreateQuestionCommand,
    ) -> ApplicationResult<QuestionDto> {
        let title = QuestionTitle::new(command.title)?;
        let content = QuestionContent::new(command.content)?;

        let slug = self.slug_service.generate_unique_slug(&title).await?;
        let created_at = self.clock.now();

        let new_question = NewQuestion::new(title, slug, content, actor.id, created_at);
        let created = self.write_repo.insert(new_question).await?;

        Ok(created.into())
    }
}
