use crate::application::ApplicationResult;
use async_trait::async_trait;

/// String key-value persistence used for reader comments.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Return the stored value, or `None` when the key was never written.
    async fn get(&self, key: &str) -> ApplicationResult<Option<String>>;

    /// Overwrite the value stored under `key`.
    async fn set(&self, key: &str, value: String) -> ApplicationResult<()>;
}
