use super::ArticleQueryService;
use crate::application::{dto::ArticleBodyDto, error::ApplicationResult};

pub struct GetArticleContentQuery {
    pub id: String,
}

impl ArticleQueryService {
    /// Cached body when present, otherwise a fresh generation (awaited).
    pub async fn get_article_content(
        &self,
        query: GetArticleContentQuery,
    ) -> ApplicationResult<ArticleBodyDto> {
        let id = Self::parse_id(&query.id)?;
        let body = self.body_loader.load(&id).await?;
        Ok(ArticleBodyDto {
            article_id: body.article_id.into_inner(),
            content: body.content,
            fallback: body.fallback,
        })
    }
}
