use crate::errors::ServiceError;
use async_trait::async_trait;
use serde_json::Value;

/// Trait abstraction for the site's key-value backend.
/// Values are whole JSON documents; there are no partial updates.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, ServiceError>;
    async fn set(&self, key: &str, value: Value) -> Result<(), ServiceError>;
    /// Release the underlying connection. The store is not used afterwards.
    async fn close(&self) -> Result<(), ServiceError>;
}

/// Opens a backend connection for one request.
#[async_trait]
pub trait StoreConnector: Send + Sync {
    /// `None` means the backend is unavailable and the caller should use the
    /// in-memory fallback. Implementations log the reason instead of failing.
    async fn connect(&self) -> Option<Box<dyn KvStore>>;
}
