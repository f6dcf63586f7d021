// tests/support/helpers.rs
use super::builders::sample_drafts;
use super::mocks::{FixedClock, ScriptedSource, fixed_now};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use logiinsight::application::ports::storage::KeyValueStore;
use logiinsight::application::services::{ApplicationServices, ServiceSettings, detail::DetailLimits};
use logiinsight::infrastructure::repositories::InMemoryArticleRepository;
use logiinsight::infrastructure::storage::InMemoryKeyValueStore;
use logiinsight::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const TEST_NAMESPACE: &str = "test";
pub const TEST_SITE_URL: &str = "https://news.example";

pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub source: Arc<ScriptedSource>,
    pub storage: Arc<dyn KeyValueStore>,
}

impl TestApp {
    pub fn with_source(source: ScriptedSource) -> Self {
        Self::with_source_and_storage(source, Arc::new(InMemoryKeyValueStore::new()))
    }

    pub fn with_source_and_storage(source: ScriptedSource, storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_limits(source, storage, DetailLimits::default())
    }

    pub fn with_limits(
        source: ScriptedSource,
        storage: Arc<dyn KeyValueStore>,
        detail_limits: DetailLimits,
    ) -> Self {
        let source = Arc::new(source);
        let services = Arc::new(ApplicationServices::new(
            Arc::new(InMemoryArticleRepository::new()),
            Arc::clone(&source) as _,
            Arc::clone(&storage),
            Arc::new(FixedClock),
            ServiceSettings {
                namespace: TEST_NAMESPACE.into(),
                site_url: TEST_SITE_URL.into(),
                detail_limits,
            },
        ));
        Self {
            services,
            source,
            storage,
        }
    }

    /// Store populated from [`sample_drafts`].
    pub async fn loaded() -> Self {
        let app = Self::with_source(ScriptedSource::with_drafts(sample_drafts()));
        app.services.store.load().await.expect("load store");
        app
    }

    pub fn router(&self) -> axum::Router {
        build_router(HttpState {
            services: Arc::clone(&self.services),
        })
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, json)
    }
}

/// Id assigned to the draft at `index` by a load at [`fixed_now`].
pub fn article_id(index: usize) -> String {
    format!("art-{}-{index}", fixed_now().timestamp_millis())
}

/// Assert an ErrorResponse body with the expected status and reason.
pub fn assert_error(status: StatusCode, body: &Value, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(status, expected_status);
    assert_eq!(body["error"], expected_error, "unexpected body: {body}");
    assert!(
        body["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message field in ErrorResponse"
    );
}
