use crate::domain::errors::DomainResult;
use crate::domain::question::entity::{NewQuestion, Question};
use crate::domain::question::value_objects::QuestionSlug;
use async_trait::async_trait;

#[async_trait]
pub trait QuestionWriteRepository: Send + Sync {
    async fn insert(&self, question: NewQuestion) -> DomainResult<Question>;
}

#[async_trait]
pub trait QuestionReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &QuestionSlug) -> DomainResult<Option<Question>>;

    /// Number of stored questions whose slug starts with `prefix`.
    /// The prefix is matched literally; implementations escape any
    /// pattern metacharacters it contains.
    async fn count_by_slug_prefix(&self, prefix: &str) -> DomainResult<u64>;

    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<Question>>;
}
