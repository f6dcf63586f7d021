use async_trait::async_trait;
use logiinsight::application::{
    ApplicationResult, error::ApplicationError, ports::storage::KeyValueStore,
};

/// Backend that is always unreachable.
pub struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> ApplicationResult<Option<String>> {
        Err(ApplicationError::infrastructure("connection refused"))
    }

    async fn set(&self, _key: &str, _value: String) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("connection refused"))
    }
}

/// In-memory store whose reads take `delay`, widening read-modify-write windows.
pub struct SlowStore {
    inner: logiinsight::infrastructure::storage::InMemoryKeyValueStore,
    delay: std::time::Duration,
}

impl SlowStore {
    pub fn new(delay: std::time::Duration) -> Self {
        Self {
            inner: logiinsight::infrastructure::storage::InMemoryKeyValueStore::new(),
            delay,
        }
    }
}

#[async_trait]
impl KeyValueStore for SlowStore {
    async fn get(&self, key: &str) -> ApplicationResult<Option<String>> {
        tokio::time::sleep(self.delay).await;
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> ApplicationResult<()> {
        self.inner.set(key, value).await
    }
}
