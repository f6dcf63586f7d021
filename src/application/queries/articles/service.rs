use crate::{
    application::services::body::ArticleBodyLoader,
    domain::article::{ArticleId, ArticleRepository},
};
use crate::application::error::{ApplicationError, ApplicationResult};
use std::sync::Arc;

pub struct ArticleQueryService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) body_loader: Arc<ArticleBodyLoader>,
}

impl ArticleQueryService {
    pub fn new(repo: Arc<dyn ArticleRepository>, body_loader: Arc<ArticleBodyLoader>) -> Self {
        Self { repo, body_loader }
    }

    pub(super) fn parse_id(raw: &str) -> ApplicationResult<ArticleId> {
        ArticleId::new(raw).map_err(|_| ApplicationError::not_found("article not found"))
    }
}
