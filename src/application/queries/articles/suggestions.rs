use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleCardDto, SearchSuggestionsDto},
        error::ApplicationResult,
    },
    domain::navigation::{NavigationTarget, search_suggestions},
};

pub struct SearchSuggestionsQuery {
    pub query: String,
}

impl ArticleQueryService {
    pub async fn search_suggestions(
        &self,
        query: SearchSuggestionsQuery,
    ) -> ApplicationResult<SearchSuggestionsDto> {
        let articles = self.repo.list().await?;
        let matches = search_suggestions(&articles, &query.query);

        Ok(SearchSuggestionsDto {
            suggestions: ArticleCardDto::list(matches, Some(&query.query)),
            submit: NavigationTarget::search(&query.query).into(),
            query: query.query,
        })
    }
}
