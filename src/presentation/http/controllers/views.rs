// src/presentation/http/controllers/views.rs
use crate::application::{dto::ViewDto, queries::views::RenderViewQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::Uri};

/// Page model for any location: `/`, `/team`, `/article/{id}` and every
/// other path (which renders as home).
#[utoipa::path(
    get,
    path = "/",
    params(
        ("category" = Option<String>, Query, description = "Category label, e.g. `Air Freight`"),
        ("tag" = Option<String>, Query, description = "Tag filter (case-insensitive)"),
        ("q" = Option<String>, Query, description = "Free-text search over title and summary")
    ),
    responses(
        (status = 200, description = "View model derived from the request URL.", body = ViewDto),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Views"
)]
pub async fn render_view(
    Extension(state): Extension<HttpState>,
    uri: Uri,
) -> HttpResult<Json<ViewDto>> {
    let location = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), |pq| pq.as_str().to_string());

    let view = state
        .services
        .view_queries
        .render(RenderViewQuery { location })
        .await
        .into_http()?;
    Ok(Json(view))
}
