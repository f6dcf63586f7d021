// src/presentation/http/controllers/viewers.rs
use crate::application::dto::{DetailSnapshotDto, ViewerDto};
use crate::application::error::ApplicationError;
use crate::domain::article::ArticleId;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

#[utoipa::path(
    post,
    path = "/api/v1/viewers",
    responses(
        (status = 201, description = "New viewer identifier for detail slots. Ids lapse after a period of inactivity.", body = ViewerDto)
    ),
    tag = "Viewers"
)]
pub async fn create_viewer(
    Extension(state): Extension<HttpState>,
) -> HttpResult<(StatusCode, Json<ViewerDto>)> {
    let viewer_id = state.services.detail_views.register().into_http()?;
    Ok((StatusCode::CREATED, Json(ViewerDto { viewer_id })))
}

/// Open an article in the viewer's detail slot. A cached body is returned as
/// `ready`; otherwise the slot reports `loading` until generation finishes.
#[utoipa::path(
    post,
    path = "/api/v1/viewers/{viewer}/detail/{id}",
    params(
        ("viewer" = String, Path, description = "Viewer identifier"),
        ("id" = String, Path, description = "Article identifier")
    ),
    responses(
        (status = 200, description = "Slot state right after mounting.", body = DetailSnapshotDto),
        (status = 404, description = "Unknown viewer or article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many requests.")
    ),
    tag = "Viewers"
)]
pub async fn mount_detail(
    Extension(state): Extension<HttpState>,
    Path((viewer, id)): Path<(String, String)>,
) -> HttpResult<Json<DetailSnapshotDto>> {
    let article_id = ArticleId::new(id)
        .map_err(|_| HttpError::from_error(ApplicationError::not_found("article not found")))?;
    let mounted = state
        .services
        .detail_views
        .mount(&viewer, &article_id)
        .await
        .into_http()?;
    Ok(Json(DetailSnapshotDto::new(viewer, mounted.state)))
}

#[utoipa::path(
    get,
    path = "/api/v1/viewers/{viewer}/detail",
    params(("viewer" = String, Path, description = "Viewer identifier")),
    responses(
        (status = 200, description = "Current slot state; `idle` when nothing is mounted.", body = DetailSnapshotDto),
        (status = 404, description = "Unknown or expired viewer.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Viewers"
)]
pub async fn get_detail(
    Extension(state): Extension<HttpState>,
    Path(viewer): Path<String>,
) -> HttpResult<Json<DetailSnapshotDto>> {
    let body_state = state.services.detail_views.snapshot(&viewer).into_http()?;
    Ok(Json(DetailSnapshotDto::new(viewer, body_state)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/viewers/{viewer}/detail",
    params(("viewer" = String, Path, description = "Viewer identifier")),
    responses(
        (status = 204, description = "Slot closed; a pending body will be discarded."),
        (status = 404, description = "Unknown or expired viewer.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Viewers"
)]
pub async fn close_detail(
    Extension(state): Extension<HttpState>,
    Path(viewer): Path<String>,
) -> HttpResult<StatusCode> {
    state.services.detail_views.close(&viewer).into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
