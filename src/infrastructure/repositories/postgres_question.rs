// src/infrastructure/repositories/postgres_question.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::question::{
    NewQuestion, Question, QuestionContent, QuestionId, QuestionReadRepository, QuestionSlug,
    QuestionTitle, QuestionWriteRepository,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresQuestionWriteRepository {
    pool: PgPool,
}

impl PostgresQuestionWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresQuestionReadRepository {
    pool: PgPool,
}

impl PostgresQuestionReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct QuestionRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    author_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<QuestionRow> for Question {
    type Error = DomainError;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        Ok(Question {
            id: QuestionId::new(row.id)?,
            title: QuestionTitle::new(row.title)?,
            slug: QuestionSlug::new(row.slug)?,
            content: QuestionContent::new(row.content)?,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
        })
    }
}

/// Escapes LIKE metacharacters so a bound pattern matches the prefix
/// literally. Postgres treats backslash as the default escape character.
fn escape_like(prefix: &str) -> String {
    let mut escaped = String::with_capacity(prefix.len());
    for c in prefix.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl QuestionWriteRepository for PostgresQuestionWriteRepository {
    async fn insert(&self, question: NewQuestion) -> DomainResult<Question> {
        let NewQuestion {
            title,
            slug,
            content,
            author_id,
            created_at,
        } = question;

        let row = sqlx::query_as::<_, QuestionRow>(
            "INSERT INTO questions (title, slug, content, author_id, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, title, slug, content, author_id, created_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(i64::from(author_id))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Question::try_from(row)
    }
}

#[async_trait]
impl QuestionReadRepository for PostgresQuestionReadRepository {
    async fn find_by_slug(&self, slug: &QuestionSlug) -> DomainResult<Option<Question>> {
        let row = sqlx::query_as::<_, QuestionRow>(
            "SELECT id, title, slug, content, author_id, created_at
             FROM questions WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Question::try_from).transpose()
    }

    async fn count_by_slug_prefix(&self, prefix: &str) -> DomainResult<u64> {
        let pattern = format!("{}%", escape_like(prefix));

        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM questions WHERE slug LIKE $1")
            .bind(pattern)
            .fetch_one(&self.pool)
            .await
            .map(|count| count as u64)
            .map_err(map_sqlx)
    }

    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            "SELECT id, title, slug, content, author_id, created_at
             FROM questions ORDER BY created_at DESC, id DESC LIMIT $1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Question::try_from).collect()
    }
}
