use crate::application::{dto::SearchSuggestionsDto, queries::articles::SearchSuggestionsQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct SuggestionParams {
    #[serde(default)]
    pub q: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/search/suggestions",
    params(SuggestionParams),
    responses(
        (status = 200, description = "Up to five matching articles.", body = SearchSuggestionsDto)
    ),
    tag = "Search"
)]
pub async fn suggestions(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SuggestionParams>,
) -> HttpResult<Json<SearchSuggestionsDto>> {
    let result = state
        .services
        .article_queries
        .search_suggestions(SearchSuggestionsQuery { query: params.q })
        .await
        .into_http()?;
    Ok(Json(result))
}
