use async_trait::async_trait;
use redis::{aio::MultiplexedConnection, AsyncCommands};
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::ServiceError;
use crate::storage::kv_store::{KvStore, StoreConnector};

/// Connects to Redis once per request.
#[derive(Clone)]
pub struct RedisConnector {
    client: redis::Client,
}

impl RedisConnector {
    /// Parse the connection URL. No network traffic happens here.
    pub fn new(url: &str) -> Result<Self, ServiceError> {
        let client = redis::Client::open(url)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl StoreConnector for RedisConnector {
    async fn connect(&self) -> Option<Box<dyn KvStore>> {
        match self.client.get_multiplexed_async_connection().await {
            Ok(conn) => {
                debug!("redis connection opened");
                Some(Box::new(RedisStore { conn }))
            }
            Err(e) => {
                warn!(error = %e, "failed to connect to redis; falling back to in-memory storage (not persistent)");
                None
            }
        }
    }
}

/// One open Redis connection. Values are stored as JSON text.
pub struct RedisStore {
    conn: MultiplexedConnection,
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, ServiceError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.get(key).await?;
        raw.map(|text| serde_json::from_str(&text).map_err(|e| ServiceError::decode(key, e)))
            .transpose()
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), ServiceError> {
        let text = serde_json::to_string(&value).map_err(|e| ServiceError::Store(e.to_string()))?;
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, text).await?;
        Ok(())
    }

    async fn close(&self) -> Result<(), ServiceError> {
        let mut conn = self.conn.clone();
        redis::cmd("QUIT").query_async::<_, ()>(&mut conn).await?;
        debug!("redis connection closed");
        Ok(())
    }
}
