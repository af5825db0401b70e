use serde::{Deserialize, Serialize};
use std::fmt;

/// How a post is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Carousel,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
            MediaKind::Carousel => write!(f, "carousel"),
        }
    }
}

/// A Notion page normalized for the media grid.
///
/// `images` is set only for image and carousel posts, `video_url` only for
/// video posts, and both are absent when the page had no usable attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPost {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub date: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Flat cover URL kept for consumers of the older single-URL payload.
    #[serde(default)]
    pub url: String,
}

impl MediaPost {
    /// Image URLs, empty for video posts and posts without media.
    pub fn images(&self) -> &[String] {
        self.images.as_deref().unwrap_or_default()
    }

    /// Whether there is anything to show beyond a placeholder.
    pub fn has_media(&self) -> bool {
        match self.kind {
            MediaKind::Video => self.video_url.is_some(),
            MediaKind::Image | MediaKind::Carousel => !self.images().is_empty(),
        }
    }

    pub fn is_carousel(&self) -> bool {
        self.kind == MediaKind::Carousel
    }
}
