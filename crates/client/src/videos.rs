use models::video::Video;
use serde_json::json;

use crate::{check, decode, ClientError, SiteClient};

pub struct VideoApi<'a> {
    client: &'a SiteClient,
}

impl<'a> VideoApi<'a> {
    pub(crate) fn new(client: &'a SiteClient) -> Self {
        Self { client }
    }

    fn endpoint(&self) -> String {
        self.client.url("/videos")
    }

    pub async fn get_all(&self) -> Result<Vec<Video>, ClientError> {
        let res = self.client.http().get(self.endpoint()).send().await?;
        decode(res, "Failed to fetch videos").await
    }

    pub async fn create(&self, youtube_url: &str, description: &str) -> Result<Video, ClientError> {
        let body = json!({"youtubeUrl": youtube_url, "description": description});
        let res = self.client.http().post(self.endpoint()).json(&body).send().await?;
        decode(res, "Failed to create video").await
    }

    /// Replace the url and description of an existing video.
    pub async fn update(&self, id: &str, youtube_url: &str, description: &str) -> Result<Video, ClientError> {
        let body = json!({"id": id, "youtubeUrl": youtube_url, "description": description});
        let res = self.client.http().put(self.endpoint()).json(&body).send().await?;
        decode(res, "Failed to update video").await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let res = self.client.http().delete(self.endpoint()).query(&[("id", id)]).send().await?;
        check(res, "Failed to delete video").await?;
        Ok(())
    }
}
