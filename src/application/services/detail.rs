// src/application/services/detail.rs
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;

use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    services::body::{ArticleBodyLoader, LoadedBody, cached},
};
use crate::domain::article::ArticleId;

const DEFAULT_MAX_VIEWERS: usize = 10_000;
const DEFAULT_VIEWER_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BodyState {
    #[default]
    Idle,
    Loading {
        article_id: ArticleId,
    },
    Ready(LoadedBody),
}

/// Result of mounting a detail view. `pending` resolves to `true` when the
/// generated body was applied and `false` when it arrived stale.
pub struct MountedDetail {
    pub state: BodyState,
    pub pending: Option<JoinHandle<bool>>,
}

/// Bounds on the viewer registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailLimits {
    /// Registering past this evicts the least recently used viewer.
    pub max_viewers: usize,
    /// Viewers untouched for longer than this are forgotten.
    pub idle_ttl: Duration,
}

impl Default for DetailLimits {
    fn default() -> Self {
        Self {
            max_viewers: DEFAULT_MAX_VIEWERS,
            idle_ttl: DEFAULT_VIEWER_IDLE_TTL,
        }
    }
}

struct Slot {
    token: u64,
    state: BodyState,
}

struct Viewer {
    slot: Option<Slot>,
    last_seen: Instant,
}

#[derive(Default)]
struct Registry {
    next_token: u64,
    viewers: HashMap<String, Viewer>,
}

impl Registry {
    fn evict(&mut self, limits: DetailLimits, now: Instant) {
        let before = self.viewers.len();
        self.viewers
            .retain(|_, viewer| now.duration_since(viewer.last_seen) <= limits.idle_ttl);

        let capacity = limits.max_viewers.max(1);
        while self.viewers.len() >= capacity {
            let Some(oldest) = self
                .viewers
                .iter()
                .min_by_key(|(_, viewer)| viewer.last_seen)
                .map(|(id, _)| id.clone())
            else {
                break;
            };
            self.viewers.remove(&oldest);
        }

        let evicted = before - self.viewers.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = self.viewers.len(), "evicted detail viewers");
        }
    }

    /// Refresh the viewer's idle timer. Expired viewers are dropped here too,
    /// so a lapsed id stops working even before the next registration.
    fn touch(
        &mut self,
        viewer: &str,
        limits: DetailLimits,
        now: Instant,
    ) -> ApplicationResult<&mut Viewer> {
        let expired = self
            .viewers
            .get(viewer)
            .is_some_and(|entry| now.duration_since(entry.last_seen) > limits.idle_ttl);
        if expired {
            self.viewers.remove(viewer);
        }

        let entry = self
            .viewers
            .get_mut(viewer)
            .ok_or_else(|| ApplicationError::not_found("unknown viewer"))?;
        entry.last_seen = now;
        Ok(entry)
    }
}

/// One detail slot per registered viewer. Each mount takes a fresh token
/// under the registry lock; a body that resolves after its slot has moved on
/// to another token is dropped.
pub struct DetailViews {
    loader: Arc<ArticleBodyLoader>,
    registry: Arc<Mutex<Registry>>,
    limits: DetailLimits,
}

impl DetailViews {
    pub fn with_limits(loader: Arc<ArticleBodyLoader>, limits: DetailLimits) -> Self {
        Self {
            loader,
            registry: Arc::new(Mutex::new(Registry::default())),
            limits,
        }
    }

    /// Issue a new viewer id. Only issued ids can mount, poll or close.
    pub fn register(&self) -> ApplicationResult<String> {
        let viewer_id = uuid::Uuid::new_v4().to_string();
        let now = Instant::now();
        let mut registry = lock(&self.registry)?;
        registry.evict(self.limits, now);
        registry.viewers.insert(
            viewer_id.clone(),
            Viewer {
                slot: None,
                last_seen: now,
            },
        );
        tracing::debug!(%viewer_id, viewers = registry.viewers.len(), "viewer registered");
        Ok(viewer_id)
    }

    pub fn viewer_count(&self) -> ApplicationResult<usize> {
        Ok(lock(&self.registry)?.viewers.len())
    }

    pub async fn mount(&self, viewer: &str, id: &ArticleId) -> ApplicationResult<MountedDetail> {
        let article = self.loader.find(id).await?;

        if let Some(body) = cached(&article) {
            let state = BodyState::Ready(body);
            self.install(viewer, state.clone())?;
            return Ok(MountedDetail {
                state,
                pending: None,
            });
        }

        let state = BodyState::Loading {
            article_id: article.id.clone(),
        };
        let token = self.install(viewer, state.clone())?;
        tracing::debug!(viewer, article_id = %article.id, token, "detail view mounted, generating body");

        let loader = Arc::clone(&self.loader);
        let registry = Arc::clone(&self.registry);
        let viewer = viewer.to_string();
        let pending = tokio::spawn(async move {
            let body = loader.generate(&article).await;
            apply(&registry, &viewer, token, body)
        });

        Ok(MountedDetail {
            state,
            pending: Some(pending),
        })
    }

    pub fn snapshot(&self, viewer: &str) -> ApplicationResult<BodyState> {
        let mut registry = lock(&self.registry)?;
        let entry = registry.touch(viewer, self.limits, Instant::now())?;
        Ok(entry
            .slot
            .as_ref()
            .map(|slot| slot.state.clone())
            .unwrap_or_default())
    }

    /// Empty the viewer's slot; any in-flight body for it will be dropped.
    pub fn close(&self, viewer: &str) -> ApplicationResult<()> {
        let mut registry = lock(&self.registry)?;
        registry.touch(viewer, self.limits, Instant::now())?.slot = None;
        Ok(())
    }

    /// Token allocation and slot replacement happen in one critical section,
    /// so the installed slot always carries the newest token.
    fn install(&self, viewer: &str, state: BodyState) -> ApplicationResult<u64> {
        let mut registry = lock(&self.registry)?;
        registry.next_token += 1;
        let token = registry.next_token;
        registry.touch(viewer, self.limits, Instant::now())?.slot = Some(Slot { token, state });
        Ok(token)
    }
}

fn lock(registry: &Mutex<Registry>) -> ApplicationResult<MutexGuard<'_, Registry>> {
    registry
        .lock()
        .map_err(|_| ApplicationError::infrastructure("detail view registry poisoned"))
}

fn apply(registry: &Mutex<Registry>, viewer: &str, token: u64, body: LoadedBody) -> bool {
    let Ok(mut guard) = registry.lock() else {
        tracing::error!(viewer, "detail view registry poisoned, dropping body");
        return false;
    };

    match guard
        .viewers
        .get_mut(viewer)
        .and_then(|entry| entry.slot.as_mut())
    {
        Some(slot) if slot.token == token => {
            slot.state = BodyState::Ready(body);
            true
        }
        _ => {
            tracing::debug!(viewer, article_id = %body.article_id, token, "discarding stale article body");
            false
        }
    }
}
