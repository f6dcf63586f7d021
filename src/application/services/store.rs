use std::sync::Arc;

use crate::application::{ApplicationResult, services::content::ContentService};
use crate::domain::article::{ArticleRepository, ensure_unique_ids};

/// Populates the article repository exactly once.
pub struct ArticleStoreService {
    repo: Arc<dyn ArticleRepository>,
    content: Arc<ContentService>,
}

impl ArticleStoreService {
    pub fn new(repo: Arc<dyn ArticleRepository>, content: Arc<ContentService>) -> Self {
        Self { repo, content }
    }

    /// Fetch the listing and install it. Returns `false` when the store was
    /// already loaded and nothing was fetched.
    pub async fn load(&self) -> ApplicationResult<bool> {
        if self.repo.is_loaded().await? {
            tracing::debug!("article store already loaded, skipping fetch");
            return Ok(false);
        }

        let articles = self.content.fetch_latest_articles().await;
        ensure_unique_ids(&articles)?;
        let count = articles.len();
        self.repo.replace_all(articles).await?;
        tracing::info!(count, "article store loaded");
        Ok(true)
    }

    /// Run [`Self::load`] in the background so requests can be served (as
    /// `loading`) while the provider is still generating.
    pub fn spawn_load(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let store = Arc::clone(self);
        tokio::spawn(async move {
            if let Err(err) = store.load().await {
                tracing::error!(error = %err, "failed to load article store");
            }
        })
    }
}
