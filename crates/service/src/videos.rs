//! Curated video list: whole-list CRUD under a single key.

use models::{
    ids,
    video::{require_video_id, Video, VideoDraft, VideoInput},
};
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::{JsonList, KvStore, Storage};

pub use models::video::DEFAULT_VIDEOS_KEY;

#[derive(Clone)]
pub struct VideoCatalog {
    storage: Storage,
    items: JsonList<Video>,
}

impl VideoCatalog {
    pub fn new(storage: Storage, key: impl Into<String>) -> Self {
        Self { storage, items: JsonList::new(key) }
    }

    /// All videos in stored order.
    pub async fn list(&self) -> Result<Vec<Video>, ServiceError> {
        let session = self.storage.open().await;
        let result = self.items.load(session.store()).await;
        session.close().await;
        result
    }

    /// Append a new video and return it.
    pub async fn create(&self, input: VideoInput) -> Result<Video, ServiceError> {
        let draft = input.into_draft()?;
        let session = self.storage.open().await;
        let result = self.create_in(session.store(), draft).await;
        session.close().await;
        result
    }

    /// Replace url and description of the video with the given id, keeping
    /// its position.
    pub async fn update(&self, input: VideoInput) -> Result<Video, ServiceError> {
        let (id, draft) = input.into_replacement()?;
        let session = self.storage.open().await;
        let result = self.update_in(session.store(), id, draft).await;
        session.close().await;
        result
    }

    /// Remove every video with the given id. Succeeds when nothing matches.
    pub async fn delete(&self, id: Option<&str>) -> Result<(), ServiceError> {
        let id = require_video_id(id)?;
        let session = self.storage.open().await;
        let result = self.delete_in(session.store(), id).await;
        session.close().await;
        result
    }

    async fn create_in(&self, store: &dyn KvStore, draft: VideoDraft) -> Result<Video, ServiceError> {
        let mut videos = self.items.load(store).await?;
        let id = ids::next_id(ids::now_millis(), videos.iter().map(|v| v.id.as_str()));
        let video = Video::new(id, draft);
        videos.push(video.clone());
        self.items.save(store, &videos).await?;
        info!(id = %video.id, count = videos.len(), "video created");
        Ok(video)
    }

    async fn update_in(&self, store: &dyn KvStore, id: String, draft: VideoDraft) -> Result<Video, ServiceError> {
        let mut videos = self.items.load(store).await?;
        let slot = videos
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| ServiceError::not_found("Video"))?;
        *slot = Video::new(id, draft);
        let updated = slot.clone();
        self.items.save(store, &videos).await?;
        info!(id = %updated.id, "video updated");
        Ok(updated)
    }

    async fn delete_in(&self, store: &dyn KvStore, id: &str) -> Result<(), ServiceError> {
        let mut videos = self.items.load(store).await?;
        let before = videos.len();
        videos.retain(|v| v.id != id);
        self.items.save(store, &videos).await?;
        info!(%id, removed = before - videos.len(), "video delete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;
    use serde_json::json;

    fn catalog() -> VideoCatalog {
        VideoCatalog::new(Storage::in_memory(), DEFAULT_VIDEOS_KEY)
    }

    fn input(url: &str, description: Option<&str>) -> VideoInput {
        VideoInput {
            id: None,
            youtube_url: Some(url.to_string()),
            description: description.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn create_appends_with_unique_ids() -> Result<(), anyhow::Error> {
        let videos = catalog();
        let a = videos.create(input("https://youtu.be/aaaaaaaaaaa", Some(" first "))).await?;
        let b = videos.create(input("https://youtu.be/bbbbbbbbbbb", None)).await?;
        let c = videos.create(input("https://youtu.be/ccccccccccc", None)).await?;

        assert_eq!(a.description, "first");
        assert_eq!(b.description, "");
        assert!(a.id != b.id && b.id != c.id && a.id != c.id);

        let listed = videos.list().await?;
        assert_eq!(listed, vec![a, b, c]);
        Ok(())
    }

    #[tokio::test]
    async fn blank_url_does_not_touch_the_list() -> Result<(), anyhow::Error> {
        let videos = catalog();
        videos.create(input("https://youtu.be/aaaaaaaaaaa", None)).await?;
        let before = videos.list().await?;

        let err = videos.create(input("   ", Some("x"))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(ModelError::Validation(_))));
        assert_eq!(videos.list().await?, before);
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_in_place() -> Result<(), anyhow::Error> {
        let videos = catalog();
        let a = videos.create(input("https://youtu.be/aaaaaaaaaaa", Some("a"))).await?;
        let b = videos.create(input("https://youtu.be/bbbbbbbbbbb", Some("b"))).await?;
        let c = videos.create(input("https://youtu.be/ccccccccccc", Some("c"))).await?;

        let updated = videos
            .update(VideoInput {
                id: Some(b.id.clone()),
                youtube_url: Some(" https://youtu.be/zzzzzzzzzzz ".into()),
                description: None,
            })
            .await?;
        assert_eq!(updated.id, b.id);
        assert_eq!(updated.youtube_url, "https://youtu.be/zzzzzzzzzzz");
        assert_eq!(updated.description, "");
        assert_eq!(videos.list().await?, vec![a, updated, c]);
        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() -> Result<(), anyhow::Error> {
        let videos = catalog();
        videos.create(input("https://youtu.be/aaaaaaaaaaa", None)).await?;
        let before = videos.list().await?;

        let err = videos
            .update(VideoInput { id: Some("nope".into()), youtube_url: Some("u".into()), description: None })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Video not found"));
        assert_eq!(videos.list().await?, before);
        Ok(())
    }

    #[tokio::test]
    async fn ids_match_exactly() -> Result<(), anyhow::Error> {
        let videos = catalog();
        let a = videos.create(input("https://youtu.be/aaaaaaaaaaa", None)).await?;

        let padded = format!(" {} ", a.id);
        let err = videos
            .update(VideoInput { id: Some(padded.clone()), youtube_url: Some("u".into()), description: None })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        videos.delete(Some(padded.as_str())).await?;
        assert_eq!(videos.list().await?, vec![a]);
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_idempotent_and_drops_duplicates() -> Result<(), anyhow::Error> {
        let storage = Storage::in_memory();
        storage
            .fallback()
            .set(
                DEFAULT_VIDEOS_KEY,
                json!([
                    {"id": "1", "youtubeUrl": "a", "description": ""},
                    {"id": "2", "youtubeUrl": "b", "description": ""},
                    {"id": "1", "youtubeUrl": "c", "description": ""}
                ]),
            )
            .await?;
        let videos = VideoCatalog::new(storage, DEFAULT_VIDEOS_KEY);

        videos.delete(Some("1")).await?;
        let remaining = videos.list().await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "2");

        videos.delete(Some("1")).await?;
        assert_eq!(videos.list().await?, remaining);

        assert!(videos.delete(Some(" ")).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn malformed_stored_list_is_an_error() -> Result<(), anyhow::Error> {
        let storage = Storage::in_memory();
        storage.fallback().set(DEFAULT_VIDEOS_KEY, json!("garbage")).await?;
        let videos = VideoCatalog::new(storage, DEFAULT_VIDEOS_KEY);
        assert!(matches!(videos.list().await, Err(ServiceError::Decode { .. })));
        Ok(())
    }
}
