use std::sync::Arc;

use crate::domain::question::QuestionReadRepository;

pub struct QuestionQueryService {
    pub(super) read_repo: Arc<dyn QuestionReadRepository>,
}

impl QuestionQueryService {
    pub fn new(read_repo: Arc<dyn QuestionReadRepository>) -> Self {
        Self { read_repo }
    }
}
