use std::sync::Arc;

use tracing::{error, warn};

use crate::storage::kv_store::{KvStore, StoreConnector};
use crate::storage::memory::MemoryStore;
use crate::storage::redis_store::RedisConnector;

/// Entry point to persistence: an optional backend connector plus the
/// in-memory fallback used whenever that backend is absent or unreachable.
#[derive(Clone)]
pub struct Storage {
    connector: Option<Arc<dyn StoreConnector>>,
    fallback: MemoryStore,
}

impl Storage {
    pub fn new(connector: Arc<dyn StoreConnector>) -> Self {
        Self { connector: Some(connector), fallback: MemoryStore::new() }
    }

    /// Storage with no backend at all. Every session uses the fallback.
    pub fn in_memory() -> Self {
        Self { connector: None, fallback: MemoryStore::new() }
    }

    /// Redis-backed storage when a usable URL is given, in-memory otherwise.
    pub fn from_redis_url(url: Option<&str>) -> Self {
        match url.map(str::trim).filter(|u| !u.is_empty()) {
            None => {
                warn!("REDIS_URL not configured; using in-memory storage (not persistent)");
                Self::in_memory()
            }
            Some(url) => match RedisConnector::new(url) {
                Ok(connector) => Self::new(Arc::new(connector)),
                Err(e) => {
                    warn!(error = %e, "invalid redis url; using in-memory storage (not persistent)");
                    Self::in_memory()
                }
            },
        }
    }

    pub fn has_backend(&self) -> bool {
        self.connector.is_some()
    }

    /// The fallback store shared by every session of this `Storage`.
    pub fn fallback(&self) -> &MemoryStore {
        &self.fallback
    }

    /// Acquire a store for one request. Never fails: an unavailable backend
    /// yields a session over the fallback.
    pub async fn open(&self) -> StoreSession {
        let conn = match &self.connector {
            Some(connector) => connector.connect().await,
            None => None,
        };
        StoreSession { conn, fallback: self.fallback.clone() }
    }
}

/// A store scoped to one request. Call [`StoreSession::close`] on every exit
/// path.
pub struct StoreSession {
    conn: Option<Box<dyn KvStore>>,
    fallback: MemoryStore,
}

impl StoreSession {
    pub fn store(&self) -> &dyn KvStore {
        match &self.conn {
            Some(conn) => conn.as_ref(),
            None => &self.fallback,
        }
    }

    /// Whether this session talks to the configured backend.
    pub fn is_backend(&self) -> bool {
        self.conn.is_some()
    }

    /// Release the backend connection, if any. Failures are logged only.
    pub async fn close(self) {
        if let Some(conn) = self.conn {
            if let Err(e) = conn.close().await {
                error!(error = %e, "error closing store connection");
            }
        }
    }
}
