use configs::StoreConfig;
use service::{
    contact::{ContactInbox, DEFAULT_CONTACT_KEY},
    storage::Storage,
    videos::{VideoCatalog, DEFAULT_VIDEOS_KEY},
};

/// Shared handler state. Both managers share one `Storage` and therefore one
/// in-memory fallback.
#[derive(Clone)]
pub struct AppState {
    pub videos: VideoCatalog,
    pub contact: ContactInbox,
}

impl AppState {
    pub fn new(storage: Storage, store: &StoreConfig) -> Self {
        Self {
            videos: VideoCatalog::new(storage.clone(), store.videos_key.clone()),
            contact: ContactInbox::new(storage, store.contact_key.clone()),
        }
    }

    /// State over the given storage with the default keys.
    pub fn with_storage(storage: Storage) -> Self {
        Self {
            videos: VideoCatalog::new(storage.clone(), DEFAULT_VIDEOS_KEY),
            contact: ContactInbox::new(storage, DEFAULT_CONTACT_KEY),
        }
    }

    pub fn in_memory() -> Self {
        Self::with_storage(Storage::in_memory())
    }
}
