pub mod auth;
pub mod questions;
pub mod users;

pub use auth::{AccessTokenDto, AuthenticatedUser, TokenSubject};
pub use questions::QuestionDto;
pub use users::UserDto;
