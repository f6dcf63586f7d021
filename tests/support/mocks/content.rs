// tests/support/mocks/content.rs
use async_trait::async_trait;
use logiinsight::application::ports::content::{ArticleDraft, ContentSource, ContentSourceError};
use logiinsight::domain::article::Article;
use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use tokio::sync::Semaphore;

/// Content provider with scripted answers.
///
/// Listing returns the configured drafts (or fails when none were given).
/// Bodies are `## Body for <id>` unless body generation is set to fail.
/// A gated article's body is held back until [`ScriptedSource::release`].
#[derive(Default)]
pub struct ScriptedSource {
    drafts: Option<Vec<ArticleDraft>>,
    fail_bodies: bool,
    gates: Mutex<HashMap<String, Arc<Semaphore>>>,
    list_calls: AtomicUsize,
    body_calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn with_drafts(drafts: Vec<ArticleDraft>) -> Self {
        Self {
            drafts: Some(drafts),
            ..Self::default()
        }
    }

    /// Listing and bodies both fail.
    pub fn failing() -> Self {
        Self {
            fail_bodies: true,
            ..Self::default()
        }
    }

    pub fn failing_bodies(mut self) -> Self {
        self.fail_bodies = true;
        self
    }

    /// Hold back the body of `article_id` until released.
    pub fn gate(&self, article_id: &str) {
        self.gates
            .lock()
            .unwrap()
            .insert(article_id.to_string(), Arc::new(Semaphore::new(0)));
    }

    /// Let one held-back generation of `article_id` finish.
    pub fn release(&self, article_id: &str) {
        if let Some(gate) = self.gates.lock().unwrap().get(article_id) {
            gate.add_permits(1);
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn body_calls(&self) -> usize {
        self.body_calls.load(Ordering::SeqCst)
    }

    pub fn body_for(article_id: &str) -> String {
        format!("## Body for {article_id}")
    }
}

#[async_trait]
impl ContentSource for ScriptedSource {
    async fn latest_articles(&self) -> Result<Vec<ArticleDraft>, ContentSourceError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.drafts
            .clone()
            .ok_or_else(|| ContentSourceError::Transport("provider offline".into()))
    }

    async fn article_body(&self, article: &Article) -> Result<String, ContentSourceError> {
        self.body_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gates.lock().unwrap().get(article.id.as_str()).cloned();
        if let Some(gate) = gate {
            gate.acquire().await.expect("gate closed").forget();
        }

        if self.fail_bodies {
            return Err(ContentSourceError::Status {
                status: 503,
                message: "overloaded".into(),
            });
        }
        Ok(Self::body_for(article.id.as_str()))
    }
}
