//! Storage abstractions for the service layer
//!
//! One key-value adapter (`KvStore`) with pluggable backends, plus the
//! per-request session that falls back to process memory when no backend
//! can be reached.

pub mod kv_store;
pub mod memory;
pub mod redis_store;
pub mod json_list;
pub mod session;

pub use json_list::JsonList;
pub use kv_store::{KvStore, StoreConnector};
pub use memory::MemoryStore;
pub use redis_store::{RedisConnector, RedisStore};
pub use session::{Storage, StoreSession};
