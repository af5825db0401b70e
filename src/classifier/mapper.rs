//! Page record to media post mapping.

use super::attachments::{select_media, MediaSelection};
use super::dates::display_date;
use crate::config::PropertyNames;
use crate::constants::{FALLBACK_COVER_URL, UNTITLED_POST};
use crate::model::{MediaKind, MediaPost, PageRecord};

/// Normalizes one Notion page into a [`MediaPost`].
///
/// Missing or differently-typed columns never fail the mapping; they fall
/// back to "Untitled", the creation date, and no media respectively.
pub fn map_page(page: &PageRecord, names: &PropertyNames) -> MediaPost {
    let properties = &page.properties;

    // The first segment is shown as written; only a missing one is "Untitled"
    let title = properties
        .title(&names.title)
        .and_then(|segments| segments.first())
        .map(|segment| segment.plain_text.as_str())
        .unwrap_or(UNTITLED_POST)
        .to_string();

    let date = display_date(properties.date(&names.publish_date), page.created_time);

    let attachments = properties.files(&names.visuals).unwrap_or_default();

    let (kind, images, video_url) = match select_media(attachments) {
        MediaSelection::Video(url) => (MediaKind::Video, None, url),
        MediaSelection::Carousel(urls) => (MediaKind::Carousel, non_empty(urls), None),
        MediaSelection::Single(url) => (MediaKind::Image, url.map(|u| vec![u]), None),
        MediaSelection::Empty => (MediaKind::Image, None, None),
    };

    let url = video_url
        .as_deref()
        .or_else(|| images.as_ref().and_then(|urls| urls.first()).map(String::as_str))
        .unwrap_or(FALLBACK_COVER_URL)
        .to_string();

    MediaPost {
        id: page.id.clone(),
        kind,
        date,
        title,
        images,
        video_url,
        url,
    }
}

fn non_empty(urls: Vec<String>) -> Option<Vec<String>> {
    if urls.is_empty() {
        None
    } else {
        Some(urls)
    }
}
