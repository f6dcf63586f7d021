// src/application/services/mod.rs
pub mod body;
pub mod comments;
pub mod content;
pub mod detail;
pub mod store;

use std::sync::Arc;

use crate::{
    application::{
        commands::{comments::CommentCommandService, newsletter::NewsletterCommandService},
        ports::{ClockPort, ContentSourcePort, KeyValueStorePort},
        queries::{articles::ArticleQueryService, views::ViewQueryService},
    },
    domain::article::ArticleRepository,
};

use self::{
    body::ArticleBodyLoader, comments::CommentStore, content::ContentService,
    detail::{DetailLimits, DetailViews},
    store::ArticleStoreService,
};

/// Deployment-specific values the services need.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Key prefix for persisted comments.
    pub namespace: String,
    /// Public base URL used in share links.
    pub site_url: String,
    pub detail_limits: DetailLimits,
}

pub struct ApplicationServices {
    pub store: Arc<ArticleStoreService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub view_queries: Arc<ViewQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub newsletter_commands: Arc<NewsletterCommandService>,
    pub detail_views: Arc<DetailViews>,
}

impl ApplicationServices {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        content_source: Arc<ContentSourcePort>,
        storage: Arc<KeyValueStorePort>,
        clock: Arc<ClockPort>,
        settings: ServiceSettings,
    ) -> Self {
        let content = Arc::new(ContentService::new(content_source, Arc::clone(&clock)));

        let store = Arc::new(ArticleStoreService::new(
            Arc::clone(&article_repo),
            Arc::clone(&content),
        ));

        let body_loader = Arc::new(ArticleBodyLoader::new(
            Arc::clone(&article_repo),
            Arc::clone(&content),
        ));

        let comment_store = Arc::new(CommentStore::new(storage, clock, settings.namespace));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_repo),
            Arc::clone(&body_loader),
        ));
        let view_queries = Arc::new(ViewQueryService::new(
            Arc::clone(&article_repo),
            Arc::clone(&comment_store),
            settings.site_url,
        ));
        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&article_repo),
            comment_store,
        ));
        let detail_views = Arc::new(DetailViews::with_limits(
            body_loader,
            settings.detail_limits,
        ));

        Self {
            store,
            article_queries,
            view_queries,
            comment_commands,
            newsletter_commands: Arc::new(NewsletterCommandService),
            detail_views,
        }
    }
}
