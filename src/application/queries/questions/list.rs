use super::QuestionQueryService;
use crate::application::{dto::QuestionDto, error::ApplicationResult};

pub const DEFAULT_LIST_LIMIT: u32 = 20;
pub const MAX_LIST_LIMIT: u32 = 100;

pub struct ListQuestionsQuery {
    pub limit: Option<u32>,
}

impl QuestionQueryService {
    /// Most recent questions first. The limit is clamped rather than
    /// rejected so callers cannot request unbounded pages.
    pub async fn list_questions(
        &self,
        query: ListQuestionsQuery,
    ) -> ApplicationResult<Vec<QuestionDto>> {
        let limit = query
            .limit
            .unwrap_or(DEFAULT_LIST_LIMIT)
            .clamp(1, MAX_LIST_LIMIT);

        let questions = self.read_repo.list_recent(limit).await?;
        Ok(questions.into_iter().map(Into::into).collect())
    }
}
