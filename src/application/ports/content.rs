// src/application/ports/content.rs
use crate::domain::article::{Article, Category};
use async_trait::async_trait;
use thiserror::Error;

/// One article record as produced by the generative provider, before the
/// store assigns ids and images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub summary: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub author: String,
    pub read_time: String,
    pub date: String,
}

#[derive(Debug, Error)]
pub enum ContentSourceError {
    #[error("content provider credentials are not configured")]
    MissingCredentials,
    #[error("content provider request failed: {0}")]
    Transport(String),
    #[error("content provider returned status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("content provider returned a malformed response: {0}")]
    Malformed(String),
    #[error("content provider returned no content")]
    Empty,
}

/// External generator of article listings and bodies. Output is
/// non-deterministic and calls may fail at any time.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn latest_articles(&self) -> Result<Vec<ArticleDraft>, ContentSourceError>;

    /// Markdown body for a single article.
    async fn article_body(&self, article: &Article) -> Result<String, ContentSourceError>;
}
