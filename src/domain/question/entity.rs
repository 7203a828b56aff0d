// src/domain/question/entity.rs
use crate::domain::question::value_objects::{
    QuestionContent, QuestionId, QuestionSlug, QuestionTitle,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// A published question. Questions are write-once; there is no update path.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: QuestionId,
    pub title: QuestionTitle,
    pub slug: QuestionSlug,
    pub content: QuestionContent,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub title: QuestionTitle,
    pub slug: QuestionSlug,
    pub content: QuestionContent,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl NewQuestion {
    pub fn new(
        title: QuestionTitle,
        slug: QuestionSlug,
        content: QuestionContent,
        author_id: UserId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            slug,
            content,
            author_id,
            created_at,
        }
    }
}
