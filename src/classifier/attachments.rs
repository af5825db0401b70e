//! Attachment classification by file-name extension.

use crate::constants::{IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};
use crate::model::FileAttachment;
use crate::types::ValidatedUrl;
use once_cell::sync::Lazy;
use regex::Regex;

static VIDEO_NAME: Lazy<Regex> = Lazy::new(|| extension_pattern(VIDEO_EXTENSIONS));
static IMAGE_NAME: Lazy<Regex> = Lazy::new(|| extension_pattern(IMAGE_EXTENSIONS));

fn extension_pattern(extensions: &[&str]) -> Regex {
    Regex::new(&format!(r"(?i)\.(?:{})$", extensions.join("|")))
        .expect("extension lists contain only alphanumerics")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Video,
    Image,
    Other,
}

pub fn classify_attachment(name: &str) -> AttachmentKind {
    if VIDEO_NAME.is_match(name) {
        AttachmentKind::Video
    } else if IMAGE_NAME.is_match(name) {
        AttachmentKind::Image
    } else {
        AttachmentKind::Other
    }
}

/// The attachment's URL, if it has one that a browser can load.
pub fn resolve_url(file: &FileAttachment) -> Option<String> {
    file.source_url()
        .filter(|url| ValidatedUrl::parse(url).is_ok())
        .map(str::to_string)
}

/// Which media a post shows, decided from its attachments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSelection {
    /// First video attachment; URL absent if it could not be resolved.
    Video(Option<String>),
    /// Two or more image attachments; unresolvable ones are dropped.
    Carousel(Vec<String>),
    /// Exactly one image attachment.
    Single(Option<String>),
    /// Nothing displayable.
    Empty,
}

/// Videos take priority over images; the first video wins.
pub fn select_media(files: &[FileAttachment]) -> MediaSelection {
    let mut images = Vec::new();

    for file in files {
        match classify_attachment(&file.name) {
            AttachmentKind::Video => return MediaSelection::Video(resolve_url(file)),
            AttachmentKind::Image => images.push(file),
            AttachmentKind::Other => {}
        }
    }

    match images.as_slice() {
        [] => MediaSelection::Empty,
        [only] => MediaSelection::Single(resolve_url(only)),
        many => MediaSelection::Carousel(many.iter().filter_map(|f| resolve_url(f)).collect()),
    }
}
