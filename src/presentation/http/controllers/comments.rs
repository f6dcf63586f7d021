// src/presentation/http/controllers/comments.rs
use crate::application::{commands::comments::AddCommentCommand, dto::CommentDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/comments",
    params(("id" = String, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Comments, newest first.", body = [CommentDto]),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    let comments = state
        .services
        .comment_commands
        .list_comments(&id)
        .await
        .into_http()?;
    Ok(Json(comments))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/comments",
    params(("id" = String, Path, description = "Article identifier")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment stored.", body = CommentDto),
        (status = 400, description = "Name or text is blank.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many requests.")
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let comment = state
        .services
        .comment_commands
        .add_comment(AddCommentCommand {
            article_id: id,
            name: payload.name,
            text: payload.text,
        })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(comment)))
}
