//! YouTube link helpers for the video pages. The server stores any non-empty
//! url; these decide what the pages can embed.

use once_cell::sync::Lazy;
use regex::Regex;

static VIDEO_LINK: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^.*(youtu.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*").ok());

const VIDEO_ID_LEN: usize = 11;

/// The raw id segment after a recognised marker, of any length.
fn id_segment(url: &str) -> Option<&str> {
    let re = VIDEO_LINK.as_ref()?;
    re.captures(url)?.get(2).map(|m| m.as_str())
}

/// Video id of a YouTube link, when it has the expected 11 characters.
pub fn video_id(url: &str) -> Option<&str> {
    id_segment(url).filter(|id| id.chars().count() == VIDEO_ID_LEN)
}

/// Embeddable player url for a YouTube link.
pub fn embed_url(url: &str) -> Option<String> {
    video_id(url).map(|id| format!("https://www.youtube.com/embed/{id}"))
}

/// Loose check used by the admin form before submitting a video.
pub fn looks_like_youtube_url(url: &str) -> bool {
    id_segment(url).is_some()
}
