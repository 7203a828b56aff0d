pub mod errors;
pub mod question;
pub mod user;
