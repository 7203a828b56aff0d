// src/presentation/http/controllers/mod.rs
pub mod accounts;
pub mod questions;
pub mod sessions;
