// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, comments, newsletter, search, viewers, views},
    middleware::rate_limit::{RateLimitLayer, rate_limit_layer},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{MethodRouter, get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Router knobs that depend on deployment configuration.
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Empty allows any origin.
    pub allowed_origins: Vec<String>,
    pub rate_limit: bool,
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with_options(state, &RouterOptions::default())
}

pub fn build_router_with_options(state: HttpState, options: &RouterOptions) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allow_origin(&options.allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let limiter = if options.rate_limit {
        let layer = rate_limit_layer();
        if layer.is_none() {
            tracing::warn!("rate limiting requested but unavailable");
        }
        layer
    } else {
        None
    };
    let limited = |route: MethodRouter| write_route(route, limiter.as_ref());

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/", get(views::render_view))
        .route("/team", get(views::render_view))
        .route("/article/{id}", get(views::render_view))
        .route("/api/v1/articles", get(articles::list_articles))
        .route(
            "/api/v1/articles/{id}/content",
            get(articles::get_article_content),
        )
        .route(
            "/api/v1/articles/{id}/comments",
            get(comments::list_comments).merge(limited(post(comments::create_comment))),
        )
        .route("/api/v1/search/suggestions", get(search::suggestions))
        .route("/api/v1/newsletter", limited(post(newsletter::subscribe)))
        .route(
            "/api/v1/newsletter/interests",
            post(newsletter::toggle_interest),
        )
        .route("/api/v1/viewers", limited(post(viewers::create_viewer)))
        .route(
            "/api/v1/viewers/{viewer}/detail/{id}",
            limited(post(viewers::mount_detail)),
        )
        .route(
            "/api/v1/viewers/{viewer}/detail",
            get(viewers::get_detail).delete(viewers::close_detail),
        )
        .fallback(views::render_view)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

fn write_route(route: MethodRouter, limiter: Option<&RateLimitLayer>) -> MethodRouter {
    match limiter {
        Some(layer) => route.layer(layer.clone()),
        None => route,
    }
}

fn allow_origin(origins: &[String]) -> AllowOrigin {
    let values: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(%origin, error = %err, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if values.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(values)
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
