// src/domain/mod.rs
pub mod article;
pub mod comment;
pub mod errors;
pub mod navigation;
pub mod newsletter;
pub mod team;
