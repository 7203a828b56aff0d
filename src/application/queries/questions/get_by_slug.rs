use super::QuestionQueryService;
use crate::{
    application::{
        dto::QuestionDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::question::QuestionSlug,
};

pub struct GetQuestionBySlugQuery {
    pub slug: String,
}

impl QuestionQueryService {
    pub async fn get_question_by_slug(
        &self,
        query: GetQuestionBySlugQuery,
    ) -> ApplicationResult<QuestionDto> {
        let slug = QuestionSlug::new(query.slug)?;
        let question = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("question not found"))?;

        Ok(question.into())
    }
}
