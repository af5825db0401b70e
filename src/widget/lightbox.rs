//! Full-screen viewer for a single post.

use crate::model::{MediaKind, MediaPost};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Playing,
    Paused,
}

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxAction {
    Close,
    Ignored,
    Navigated(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightbox {
    post: MediaPost,
    index: usize,
    playback: Playback,
}

impl Lightbox {
    /// Opens on the first image with video paused.
    pub fn open(post: MediaPost) -> Self {
        Self {
            post,
            index: 0,
            playback: Playback::Paused,
        }
    }

    pub fn post(&self) -> &MediaPost {
        &self.post
    }

    /// The carousel list, or just the first image for anything else.
    pub fn images(&self) -> &[String] {
        let images = self.post.images();
        if self.post.is_carousel() || images.is_empty() {
            images
        } else {
            &images[..1]
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images().get(self.index).map(String::as_str)
    }

    pub fn next(&mut self) -> usize {
        let len = self.images().len();
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
        self.index
    }

    pub fn previous(&mut self) -> usize {
        let len = self.images().len();
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
        self.index
    }

    pub fn has_navigation(&self) -> bool {
        self.post.is_carousel() && self.images().len() > 1
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Flips play/pause. Posts without a video stay paused.
    pub fn toggle_playback(&mut self) -> Playback {
        if self.post.kind == MediaKind::Video && self.post.video_url.is_some() {
            self.playback = match self.playback {
                Playback::Playing => Playback::Paused,
                Playback::Paused => Playback::Playing,
            };
        }
        self.playback
    }

    /// Caption under the media, e.g. `"Paused • Jan 5"` or `"2 / 3 • Jan 5"`.
    pub fn status_label(&self) -> String {
        match self.post.kind {
            MediaKind::Video => {
                let state = match self.playback {
                    Playback::Playing => "Playing",
                    Playback::Paused => "Paused",
                };
                format!("{} • {}", state, self.post.date)
            }
            _ if self.has_navigation() => format!(
                "{} / {} • {}",
                self.index + 1,
                self.images().len(),
                self.post.date
            ),
            _ => self.post.date.clone(),
        }
    }

    pub fn handle_key(&mut self, key: Key) -> LightboxAction {
        match key {
            Key::Escape => LightboxAction::Close,
            Key::ArrowLeft if self.has_navigation() => LightboxAction::Navigated(self.previous()),
            Key::ArrowRight if self.has_navigation() => LightboxAction::Navigated(self.next()),
            _ => LightboxAction::Ignored,
        }
    }
}
