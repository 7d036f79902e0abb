//! Service layer for the site's two resources.
//! - `storage`: the key-value adapter with a Redis backend and an in-memory fallback.
//! - `videos` / `contact`: whole-list CRUD over one key per resource.

pub mod errors;
pub mod storage;
pub mod videos;
pub mod contact;
