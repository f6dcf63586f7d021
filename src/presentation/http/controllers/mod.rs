// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod comments;
pub mod newsletter;
pub mod search;
pub mod viewers;
pub mod views;
