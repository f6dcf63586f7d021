// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::views::render_view,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article_content,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::search::suggestions,
        crate::presentation::http::controllers::viewers::create_viewer,
        crate::presentation::http::controllers::viewers::mount_detail,
        crate::presentation::http::controllers::viewers::get_detail,
        crate::presentation::http::controllers::viewers::close_detail,
        crate::presentation::http::controllers::newsletter::subscribe,
        crate::presentation::http::controllers::newsletter::toggle_interest,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::ArticleListParams,
            crate::presentation::http::controllers::comments::CreateCommentRequest,
            crate::presentation::http::controllers::newsletter::SubscribeRequest,
            crate::presentation::http::controllers::newsletter::ToggleInterestRequest,
            crate::presentation::http::controllers::search::SuggestionParams,
            crate::application::dto::ViewDto,
            crate::application::dto::LoadingViewDto,
            crate::application::dto::HomeViewDto,
            crate::application::dto::HeroDto,
            crate::application::dto::TeamViewDto,
            crate::application::dto::TeamMemberDto,
            crate::application::dto::ArticleViewDto,
            crate::application::dto::NotFoundViewDto,
            crate::application::dto::NavigationDto,
            crate::application::dto::NavigationTargetDto,
            crate::application::dto::CategoryOptionDto,
            crate::application::dto::TagOptionDto,
            crate::application::dto::HighlightSegmentDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleCardDto,
            crate::application::dto::ArticleListDto,
            crate::application::dto::ArticleBodyDto,
            crate::application::dto::ShareLinksDto,
            crate::application::dto::SearchSuggestionsDto,
            crate::application::dto::CommentDto,
            crate::application::dto::SubscriptionDto,
            crate::application::dto::InterestSelectionDto,
            crate::application::dto::ViewerDto,
            crate::application::dto::DetailSnapshotDto
        )
    ),
    tags(
        (name = "Views", description = "Page models derived from the request URL"),
        (name = "Articles", description = "Article store and lazily generated bodies"),
        (name = "Comments", description = "Per-article reader comments"),
        (name = "Search", description = "Header search suggestions"),
        (name = "Viewers", description = "Detail slots with stale-result protection"),
        (name = "Newsletter", description = "Newsletter sign-up"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "LogiInsight API",
        description = "Logistics news magazine backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://127.0.0.1:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(swagger)
        .merge(redoc)
}

/// Write the document to `OPENAPI_SNAPSHOT_PATH` and return the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    write_openapi_snapshot_to(Path::new(&output_path))?;
    Ok(output_path)
}

pub fn write_openapi_snapshot_to(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}
