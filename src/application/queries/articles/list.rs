use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleListDto, error::ApplicationResult},
    domain::{article::CategoryFilter, navigation::FeedFilter},
};

/// Optional narrowing of the listing; every field absent returns the store
/// contents unchanged.
#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<ArticleListDto> {
        let loaded = self.repo.is_loaded().await?;
        let filter = FeedFilter::new(
            CategoryFilter::from_param(query.category.as_deref()),
            query.search.as_deref(),
            query.tag.as_deref(),
        );
        let articles = filter.apply(&self.repo.list().await?);

        Ok(ArticleListDto {
            loaded,
            count: articles.len(),
            articles: articles.into_iter().map(Into::into).collect(),
        })
    }
}
