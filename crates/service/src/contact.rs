//! Contact form inbox: newest submission first, whole-list persistence.

use models::{
    contact::{require_submission_id, ContactForm, ContactSubmission, NewSubmission, ReadStatusUpdate},
    ids,
};
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::{JsonList, KvStore, Storage};

pub use models::contact::DEFAULT_CONTACT_KEY;

#[derive(Clone)]
pub struct ContactInbox {
    storage: Storage,
    items: JsonList<ContactSubmission>,
}

impl ContactInbox {
    pub fn new(storage: Storage, key: impl Into<String>) -> Self {
        Self { storage, items: JsonList::new(key) }
    }

    pub async fn list(&self) -> Result<Vec<ContactSubmission>, ServiceError> {
        let session = self.storage.open().await;
        let result = self.items.load(session.store()).await;
        session.close().await;
        result
    }

    /// Store a new unread submission at the front of the list.
    pub async fn create(&self, form: ContactForm) -> Result<ContactSubmission, ServiceError> {
        let form = form.validate()?;
        let session = self.storage.open().await;
        let result = self.create_in(session.store(), form).await;
        session.close().await;
        result
    }

    /// Flip the `read` flag of one submission.
    pub async fn set_read(&self, update: ReadStatusUpdate) -> Result<ContactSubmission, ServiceError> {
        let (id, read) = update.validate()?;
        let session = self.storage.open().await;
        let result = self.set_read_in(session.store(), &id, read).await;
        session.close().await;
        result
    }

    pub async fn delete(&self, id: Option<&str>) -> Result<(), ServiceError> {
        let id = require_submission_id(id)?;
        let session = self.storage.open().await;
        let result = self.delete_in(session.store(), id).await;
        session.close().await;
        result
    }

    async fn create_in(&self, store: &dyn KvStore, form: NewSubmission) -> Result<ContactSubmission, ServiceError> {
        let mut submissions = self.items.load(store).await?;
        let now = ids::now_millis();
        let id = ids::next_id(now, submissions.iter().map(|s| s.id.as_str()));
        let submission = ContactSubmission::new(id, now, form);
        submissions.insert(0, submission.clone());
        self.items.save(store, &submissions).await?;
        info!(id = %submission.id, count = submissions.len(), "contact submission stored");
        Ok(submission)
    }

    async fn set_read_in(&self, store: &dyn KvStore, id: &str, read: bool) -> Result<ContactSubmission, ServiceError> {
        let mut submissions = self.items.load(store).await?;
        let slot = submissions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ServiceError::not_found("Submission"))?;
        slot.read = read;
        let updated = slot.clone();
        self.items.save(store, &submissions).await?;
        info!(%id, read, "contact submission marked");
        Ok(updated)
    }

    async fn delete_in(&self, store: &dyn KvStore, id: &str) -> Result<(), ServiceError> {
        let mut submissions = self.items.load(store).await?;
        submissions.retain(|s| s.id != id);
        self.items.save(store, &submissions).await?;
        info!(%id, remaining = submissions.len(), "contact submission delete");
        Ok(())
    }
}
