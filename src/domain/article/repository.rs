use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Holds the article list for the lifetime of the process.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Replace the whole list and mark the store as loaded.
    async fn replace_all(&self, articles: Vec<Article>) -> DomainResult<()>;
    async fn is_loaded(&self) -> DomainResult<bool>;
    async fn list(&self) -> DomainResult<Vec<Article>>;
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>>;
    /// Attach generated body text to a stored article.
    async fn cache_content(&self, id: &ArticleId, content: String) -> DomainResult<()>;
}
