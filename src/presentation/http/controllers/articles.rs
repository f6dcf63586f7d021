// src/presentation/http/controllers/articles.rs
use crate::application::{
    dto::{ArticleBodyDto, ArticleListDto},
    queries::articles::{GetArticleContentQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct ArticleListParams {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Articles currently in the store.", body = ArticleListDto),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticleListDto>> {
    let list = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            category: params.category,
            tag: params.tag,
            search: params.q,
        })
        .await
        .into_http()?;
    Ok(Json(list))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/content",
    params(("id" = String, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Markdown body; generated on first request.", body = ArticleBodyDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_content(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleBodyDto>> {
    let body = state
        .services
        .article_queries
        .get_article_content(GetArticleContentQuery { id })
        .await
        .into_http()?;
    Ok(Json(body))
}
