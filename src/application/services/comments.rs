// src/application/services/comments.rs
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::Mutex as KeyLock;

use crate::application::{
    ApplicationResult,
    dto::CommentDto,
    error::ApplicationError,
    ports::{storage::KeyValueStore, time::Clock},
};
use crate::domain::{
    article::ArticleId,
    comment::{Comment, CommentAuthor, CommentText, comments_key},
};

/// Outcome of a submission. Invalid input leaves the stored list untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    Appended(Comment),
    Rejected(String),
}

/// Per-article comment lists kept in a key-value store, newest first.
/// Appends to the same key are serialized within this process.
pub struct CommentStore {
    storage: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    namespace: String,
    key_locks: Mutex<HashMap<String, Arc<KeyLock<()>>>>,
}

impl CommentStore {
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            clock,
            namespace: namespace.into(),
            key_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Missing and undecodable entries both read as an empty list.
    pub async fn load(&self, article_id: &ArticleId) -> ApplicationResult<Vec<Comment>> {
        let key = comments_key(&self.namespace, article_id);
        let Some(raw) = self.storage.get(&key).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<CommentDto>>(&raw) {
            Ok(records) => Ok(records.into_iter().map(Into::into).collect()),
            Err(err) => {
                tracing::warn!(%key, error = %err, "failed to parse stored comments, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    pub async fn append(
        &self,
        article_id: &ArticleId,
        name: &str,
        text: &str,
    ) -> ApplicationResult<AppendOutcome> {
        let (author, text) = match (CommentAuthor::new(name), CommentText::new(text)) {
            (Ok(author), Ok(text)) => (author, text),
            (Err(err), _) | (_, Err(err)) => {
                tracing::debug!(article_id = %article_id, error = %err, "rejected comment");
                return Ok(AppendOutcome::Rejected(err.to_string()));
            }
        };

        let key = comments_key(&self.namespace, article_id);
        let key_lock = self.key_lock(&key)?;
        let _guard = key_lock.lock().await;

        let comment = Comment::compose(author, text, self.clock.now());
        let mut comments = self.load(article_id).await?;
        comments.insert(0, comment.clone());

        let records: Vec<CommentDto> = comments.into_iter().map(Into::into).collect();
        let payload = serde_json::to_string(&records)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        self.storage.set(&key, payload).await?;

        tracing::info!(article_id = %article_id, comment_id = %comment.id, "comment stored");
        Ok(AppendOutcome::Appended(comment))
    }

    fn key_lock(&self, key: &str) -> ApplicationResult<Arc<KeyLock<()>>> {
        let mut locks = self
            .key_locks
            .lock()
            .map_err(|_| ApplicationError::infrastructure("comment lock registry poisoned"))?;
        Ok(Arc::clone(locks.entry(key.to_string()).or_default()))
    }
}
