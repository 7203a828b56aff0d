use crate::domain::question::Question;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        Self {
            id: question.id.into(),
            title: question.title.into(),
            slug: question.slug.into(),
            content: question.content.into(),
            author_id: question.author_id.into(),
            created_at: question.created_at,
        }
    }
}
