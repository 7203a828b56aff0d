// src/domain/question/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::question::repository::QuestionReadRepository;
use crate::domain::question::value_objects::{QuestionSlug, QuestionTitle};

/// Domain service responsible for producing unique slugs for questions.
///
/// The prefix count and the later insert are not atomic. When two requests
/// race on the same base slug, the unique index on `questions.slug` rejects
/// the second insert.
pub struct QuestionSlugService {
    read_repo: Arc<dyn QuestionReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl QuestionSlugService {
    pub fn new(
        read_repo: Arc<dyn QuestionReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Derives the slug for a new question from its title.
    ///
    /// The normalized title is used as-is when no stored slug starts with
    /// it; otherwise the count of such slugs is appended as a suffix.
    pub async fn generate_unique_slug(
        &self,
        title: &QuestionTitle,
    ) -> DomainResult<QuestionSlug> {
        let base = self.generator.slugify(title.as_str());
        let taken = self.read_repo.count_by_slug_prefix(&base).await?;

        let candidate = if taken == 0 {
            base
        } else {
            format!("{base}-{taken}")
        };

        QuestionSlug::new(candidate)
    }
}
