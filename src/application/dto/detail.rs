use crate::application::services::detail::BodyState;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ViewerDto {
    pub viewer_id: String,
}

/// Body state of a viewer's detail slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DetailSnapshotDto {
    pub viewer_id: String,
    /// One of `idle`, `loading`, `ready`.
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub fallback: bool,
}

impl DetailSnapshotDto {
    pub fn new(viewer_id: impl Into<String>, state: BodyState) -> Self {
        let viewer_id = viewer_id.into();
        match state {
            BodyState::Idle => Self {
                viewer_id,
                status: "idle".into(),
                article_id: None,
                content: None,
                fallback: false,
            },
            BodyState::Loading { article_id } => Self {
                viewer_id,
                status: "loading".into(),
                article_id: Some(article_id.into_inner()),
                content: None,
                fallback: false,
            },
            BodyState::Ready(body) => Self {
                viewer_id,
                status: "ready".into(),
                article_id: Some(body.article_id.into_inner()),
                content: Some(body.content),
                fallback: body.fallback,
            },
        }
    }
}
