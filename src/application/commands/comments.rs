// src/application/commands/comments.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
        services::comments::{AppendOutcome, CommentStore},
    },
    domain::article::{ArticleId, ArticleRepository},
};

pub struct AddCommentCommand {
    pub article_id: String,
    pub name: String,
    pub text: String,
}

/// Comment reads and writes for articles that exist in the store.
pub struct CommentCommandService {
    repo: Arc<dyn ArticleRepository>,
    store: Arc<CommentStore>,
}

impl CommentCommandService {
    pub fn new(repo: Arc<dyn ArticleRepository>, store: Arc<CommentStore>) -> Self {
        Self { repo, store }
    }

    pub async fn list_comments(&self, article_id: &str) -> ApplicationResult<Vec<CommentDto>> {
        let id = self.known_article(article_id).await?;
        let comments = self.store.load(&id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }

    pub async fn add_comment(&self, command: AddCommentCommand) -> ApplicationResult<CommentDto> {
        let id = self.known_article(&command.article_id).await?;
        match self.store.append(&id, &command.name, &command.text).await? {
            AppendOutcome::Appended(comment) => Ok(comment.into()),
            AppendOutcome::Rejected(reason) => Err(ApplicationError::validation(reason)),
        }
    }

    async fn known_article(&self, raw: &str) -> ApplicationResult<ArticleId> {
        let id = ArticleId::new(raw).map_err(|_| ApplicationError::not_found("article not found"))?;
        if self.repo.find_by_id(&id).await?.is_none() {
            return Err(ApplicationError::not_found("article not found"));
        }
        Ok(id)
    }
}
