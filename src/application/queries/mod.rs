pub mod questions;

pub use questions::{GetQuestionBySlugQuery, ListQuestionsQuery, QuestionQueryService};
