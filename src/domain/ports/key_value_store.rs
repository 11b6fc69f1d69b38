use crate::infrastructure::http::middleware::error::ApiResult;
use async_trait::async_trait;
use std::time::Duration;

/// Ephemeral key-value store used as read cache and as the substrate for the
/// per-seat lock.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Set the key only if it does not already exist, with the given expiry.
    /// Returns true if the key was written. The check and the write must be a
    /// single atomic operation on the store.
    async fn set_if_absent(&self, key: &str, value: &str, ttl: Duration) -> ApiResult<bool>;

    async fn get(&self, key: &str) -> ApiResult<Option<String>>;

    /// Set a key, either with a bounded expiry or with none at all. An entry
    /// written without expiry persists until explicitly superseded.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> ApiResult<()>;

    async fn delete(&self, key: &str) -> ApiResult<()>;
}
