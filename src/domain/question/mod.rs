pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewQuestion, Question};
pub use repository::{QuestionReadRepository, QuestionWriteRepository};
pub use value_objects::{QuestionContent, QuestionId, QuestionSlug, QuestionTitle};
