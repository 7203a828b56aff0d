pub mod questions;
pub mod users;

pub use questions::{CreateQuestionCommand, QuestionCommandService};
pub use users::{LoginUserCommand, RegisterUserCommand, UserCommandService};
