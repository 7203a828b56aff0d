// tests/support/mocks/questions.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use toiita_core::domain::errors::{DomainError, DomainResult};
use toiita_core::domain::question::entity::{NewQuestion, Question};
use toiita_core::domain::question::value_objects::{
    QuestionContent, QuestionId, QuestionSlug, QuestionTitle,
};
use toiita_core::domain::user::value_objects::UserId;

/* -------------------------------- サンプルデータ -------------------------------- */

/// 固定時刻のサンプル質問を作る
pub fn sample_question(id: i64, slug: &str) -> Question {
    sample_question_at(id, slug, super::time::fixed_now())
}

pub fn sample_question_at(id: i64, slug: &str, created_at: DateTime<Utc>) -> Question {
    Question {
        id: QuestionId::new(id).expect("invalid question id"),
        title: QuestionTitle::new("Sample question").expect("invalid title"),
        slug: QuestionSlug::new(slug).expect("invalid slug"),
        content: QuestionContent::new("Sample body.").expect("invalid content"),
        author_id: UserId::new(1).expect("invalid user id"),
        created_at,
    }
}

fn materialize(id: i64, new: NewQuestion) -> Question {
    Question {
        id: QuestionId::new(id).expect("invalid question id"),
        title: new.title,
        slug: new.slug,
        content: new.content,
        author_id: new.author_id,
        created_at: new.created_at,
    }
}

/* -------------------------------- DummyQuestionRead -------------------------------- */

/// ダミーの質問読み取りリポジトリ（常に空）
pub struct DummyQuestionRead;

#[async_trait]
impl toiita_core::domain::question::repository::QuestionReadRepository for DummyQuestionRead {
    async fn find_by_slug(&self, _slug: &QuestionSlug) -> DomainResult<Option<Question>> {
        Ok(None)
    }

    async fn count_by_slug_prefix(&self, _prefix: &str) -> DomainResult<u64> {
        Ok(0)
    }

    async fn list_recent(&self, _limit: u32) -> DomainResult<Vec<Question>> {
        Ok(vec![])
    }
}

/* -------------------------------- InMemoryQuestionRepo -------------------------------- */

/// インメモリの質問リポジトリ（読み書き両対応）
/// questions.slug の一意インデックスと同じ振る舞いで重複を拒否する
#[derive(Default)]
pub struct InMemoryQuestionRepo {
    inner: Mutex<Vec<Question>>,
}

impl InMemoryQuestionRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            inner: Mutex::new(questions),
        }
    }

    pub fn stored_slugs(&self) -> Vec<String> {
        let questions = self.inner.lock().unwrap();
        questions
            .iter()
            .map(|q| q.slug.as_str().to_string())
            .collect()
    }
}

#[async_trait]
impl toiita_core::domain::question::repository::QuestionWriteRepository for InMemoryQuestionRepo {
    async fn insert(&self, question: NewQuestion) -> DomainResult<Question> {
        let mut questions = self.inner.lock().unwrap();
        if questions.iter().any(|q| q.slug == question.slug) {
            return Err(DomainError::Persistence(
                "duplicate slug reached the store".into(),
            ));
        }

        let stored = materialize(questions.len() as i64 + 1, question);
        questions.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl toiita_core::domain::question::repository::QuestionReadRepository for InMemoryQuestionRepo {
    async fn find_by_slug(&self, slug: &QuestionSlug) -> DomainResult<Option<Question>> {
        let questions = self.inner.lock().unwrap();
        Ok(questions.iter().find(|q| q.slug == *slug).cloned())
    }

    async fn count_by_slug_prefix(&self, prefix: &str) -> DomainResult<u64> {
        let questions = self.inner.lock().unwrap();
        Ok(questions
            .iter()
            .filter(|q| q.slug.as_str().starts_with(prefix))
            .count() as u64)
    }

    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<Question>> {
        let questions = self.inner.lock().unwrap();
        let mut page: Vec<Question> = questions.clone();
        page.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        page.truncate(limit as usize);
        Ok(page)
    }
}

/* -------------------------------- CapturingQuestionWrite -------------------------------- */

/// 挿入が呼ばれたかどうかを記録する書き込みリポジトリ
#[derive(Default)]
pub struct CapturingQuestionWrite {
    called: AtomicBool,
}

impl CapturingQuestionWrite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn was_called(&self) -> bool {
        self.called.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl toiita_core::domain::question::repository::QuestionWriteRepository for CapturingQuestionWrite {
    async fn insert(&self, question: NewQuestion) -> DomainResult<Question> {
        self.called.store(true, Ordering::SeqCst);
        Ok(materialize(1, question))
    }
}

/* -------------------------------- FailingQuestionWrite -------------------------------- */

/// 常に一意インデックス違反として失敗する書き込みリポジトリ
/// スラグ採番と挿入の競合に負けた側を再現する
pub struct FailingQuestionWrite;

#[async_trait]
impl toiita_core::domain::question::repository::QuestionWriteRepository for FailingQuestionWrite {
    async fn insert(&self, _question: NewQuestion) -> DomainResult<Question> {
        Err(DomainError::Persistence(
            "duplicate slug reached the store".into(),
        ))
    }
}
