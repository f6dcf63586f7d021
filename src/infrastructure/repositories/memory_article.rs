// src/infrastructure/repositories/memory_article.rs
use crate::domain::{
    article::{Article, ArticleId, ArticleRepository},
    errors::DomainResult,
};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    articles: Vec<Article>,
    loaded: bool,
}

/// Process-local article list, replaced once by the startup load.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    inner: RwLock<Inner>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn replace_all(&self, articles: Vec<Article>) -> DomainResult<()> {
        let mut guard = self.inner.write().await;
        guard.articles = articles;
        guard.loaded = true;
        Ok(())
    }

    async fn is_loaded(&self) -> DomainResult<bool> {
        Ok(self.inner.read().await.loaded)
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Ok(self.inner.read().await.articles.clone())
    }

    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let guard = self.inner.read().await;
        Ok(guard.articles.iter().find(|article| &article.id == id).cloned())
    }

    async fn cache_content(&self, id: &ArticleId, content: String) -> DomainResult<()> {
        let mut guard = self.inner.write().await;
        if let Some(article) = guard.articles.iter_mut().find(|article| &article.id == id) {
            article.set_content(content);
        }
        Ok(())
    }
}
