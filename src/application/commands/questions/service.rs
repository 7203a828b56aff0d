// src/application/commands/questions/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::question::{QuestionWriteRepository, services::QuestionSlugService},
};

pub struct QuestionCommandService {
    pub(super) write_repo: Arc<dyn QuestionWriteRepository>,
    pub(super) slug_service: Arc<QuestionSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl QuestionCommandService {
    pub fn new(
        write_repo: Arc<dyn QuestionWriteRepository>,
        slug_service: Arc<QuestionSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            slug_service,
            clock,
        }
    }
}
