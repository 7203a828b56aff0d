mod get_by_slug;
mod list;
mod service;

pub use get_by_slug::GetQuestionBySlugQuery;
pub use list::ListQuestionsQuery;
pub use service::QuestionQueryService;
