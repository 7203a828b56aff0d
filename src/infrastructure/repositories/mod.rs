// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_question;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_question::{PostgresQuestionReadRepository, PostgresQuestionWriteRepository};
pub use postgres_user::PostgresUserRepository;
