// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Rule violations raised while constructing domain values.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid article: {0}")]
    InvalidArticle(String),
    #[error("duplicate article id: {0}")]
    DuplicateArticleId(String),
    #[error("invalid comment: {0}")]
    InvalidComment(String),
    #[error("invalid subscription: {0}")]
    InvalidSubscription(String),
}

impl DomainError {
    /// Whether the error was caused by caller input rather than by data the
    /// service produced itself.
    pub const fn is_caller_input(&self) -> bool {
        !matches!(self, Self::DuplicateArticleId(_))
    }
}
