use crate::application::services::comments::CommentStore;
use crate::domain::article::ArticleRepository;
use std::sync::Arc;

/// Turns a request location into the page model the client renders.
pub struct ViewQueryService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) comments: Arc<CommentStore>,
    pub(super) site_url: String,
}

impl ViewQueryService {
    pub fn new(
        repo: Arc<dyn ArticleRepository>,
        comments: Arc<CommentStore>,
        site_url: impl Into<String>,
    ) -> Self {
        Self {
            repo,
            comments,
            site_url: site_url.into(),
        }
    }
}
