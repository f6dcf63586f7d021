// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{CommentAuthor, CommentText};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub name: String,
    pub text: String,
    pub date: String,
}

impl Comment {
    /// New comment stamped with `now`: the id is the creation time in
    /// milliseconds and the date reads like "October 16, 2026".
    pub fn compose(author: CommentAuthor, text: CommentText, now: DateTime<Utc>) -> Self {
        Self {
            id: now.timestamp_millis().to_string(),
            name: author.into_inner(),
            text: text.into_inner(),
            date: now.format("%B %-d, %Y").to_string(),
        }
    }
}

/// Storage key holding every comment of one article.
pub fn comments_key(namespace: &str, article_id: &ArticleId) -> String {
    format!("{namespace}_comments_{article_id}")
}
