// src/application/commands/questions/mod.rs
mod create;
mod service;

pub use create::CreateQuestionCommand;
pub use service::QuestionCommandService;
