use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, non_blank, present_id};

/// Store key holding the video list unless configured otherwise.
pub const DEFAULT_VIDEOS_KEY: &str = "igbo-heritage-videos";

/// A curated YouTube link shown on the Videos page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub youtube_url: String,
    pub description: String,
}

/// Body accepted by create and update. Every field is optional at the wire
/// level; the checks happen in [`VideoInput::into_draft`] and
/// [`VideoInput::into_replacement`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInput {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Validated, trimmed content of a video without its identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoDraft {
    pub youtube_url: String,
    pub description: String,
}

pub const MSG_URL_REQUIRED: &str = "YouTube URL is required";
pub const MSG_ID_AND_URL_REQUIRED: &str = "ID and YouTube URL are required";
pub const MSG_ID_REQUIRED: &str = "Video ID is required";

impl VideoInput {
    /// Content for a new video. Any `id` in the body is ignored.
    pub fn into_draft(self) -> Result<VideoDraft, ModelError> {
        let youtube_url = non_blank(self.youtube_url.as_deref())
            .ok_or_else(|| ModelError::Validation(MSG_URL_REQUIRED.into()))?
            .to_string();
        Ok(VideoDraft { youtube_url, description: trimmed_or_empty(self.description.as_deref()) })
    }

    /// Target id plus replacement content for an existing video.
    pub fn into_replacement(self) -> Result<(String, VideoDraft), ModelError> {
        let missing = || ModelError::Validation(MSG_ID_AND_URL_REQUIRED.into());
        let id = present_id(self.id.as_deref()).ok_or_else(missing)?.to_string();
        let youtube_url = non_blank(self.youtube_url.as_deref()).ok_or_else(missing)?.to_string();
        Ok((id, VideoDraft { youtube_url, description: trimmed_or_empty(self.description.as_deref()) }))
    }
}

impl Video {
    pub fn new(id: String, draft: VideoDraft) -> Self {
        Self { id, youtube_url: draft.youtube_url, description: draft.description }
    }
}

/// Video id taken from a query string, required for delete.
pub fn require_video_id(id: Option<&str>) -> Result<&str, ModelError> {
    present_id(id).ok_or_else(|| ModelError::Validation(MSG_ID_REQUIRED.into()))
}

fn trimmed_or_empty(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}
