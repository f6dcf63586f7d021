use crate::domain::comment::Comment;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire and storage shape of a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: String,
    pub name: String,
    pub text: String,
    pub date: String,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            name: comment.name,
            text: comment.text,
            date: comment.date,
        }
    }
}

impl From<CommentDto> for Comment {
    fn from(record: CommentDto) -> Self {
        Self {
            id: record.id,
            name: record.name,
            text: record.text,
            date: record.date,
        }
    }
}
