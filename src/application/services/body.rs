use std::sync::Arc;

use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    services::content::{ArticleBody, ContentService},
};
use crate::domain::article::{Article, ArticleId, ArticleRepository};

/// Body text resolved for one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedBody {
    pub article_id: ArticleId,
    pub content: String,
    pub fallback: bool,
}

/// Lazily produces article bodies: cached text first, the generator
/// otherwise. Generated text is written back to the store.
pub struct ArticleBodyLoader {
    repo: Arc<dyn ArticleRepository>,
    content: Arc<ContentService>,
}

impl ArticleBodyLoader {
    pub fn new(repo: Arc<dyn ArticleRepository>, content: Arc<ContentService>) -> Self {
        Self { repo, content }
    }

    pub async fn find(&self, id: &ArticleId) -> ApplicationResult<Article> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    pub async fn load(&self, id: &ArticleId) -> ApplicationResult<LoadedBody> {
        let article = self.find(id).await?;
        match cached(&article) {
            Some(body) => Ok(body),
            None => Ok(self.generate(&article).await),
        }
    }

    /// Always calls the generator. Failures are reported as the fallback body
    /// and are not cached.
    pub async fn generate(&self, article: &Article) -> LoadedBody {
        let body = self.content.generate_full_article(article).await;
        if let ArticleBody::Generated(text) = &body {
            if let Err(err) = self.repo.cache_content(&article.id, text.clone()).await {
                tracing::warn!(article_id = %article.id, error = %err, "could not cache article body");
            }
        }

        LoadedBody {
            article_id: article.id.clone(),
            content: body.as_markdown().to_string(),
            fallback: body.is_fallback(),
        }
    }
}

pub fn cached(article: &Article) -> Option<LoadedBody> {
    article.content.as_ref().map(|content| LoadedBody {
        article_id: article.id.clone(),
        content: content.clone(),
        fallback: false,
    })
}
