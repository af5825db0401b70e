//! Embeddable media widget view-model.
//!
//! [`MediaWidget`] owns the load cycle and the grid and lightbox state. It
//! renders nothing itself.

mod feed;
mod grid;
mod lightbox;

pub use feed::{FeedError, HttpMediaFeed, MediaFeed, WidgetQuery};
pub use grid::{AspectRatio, Badge, GridCell, MediaGrid, PostCell};
pub use lightbox::{Key, Lightbox, LightboxAction, Playback};

use crate::model::MediaPost;
use thiserror::Error;

/// Messages shown to the viewer. They are fixed and never carry details.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetError {
    #[error("Missing database ID or token in the URL.")]
    MissingParameters,

    #[error("No posts found in Notion database.")]
    NoPosts,

    #[error("Failed to connect to Notion. Please check your API configuration.")]
    ConnectionFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WidgetState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<MediaPost>),
    Error(WidgetError),
}

#[derive(Debug, Clone, Default)]
pub struct MediaWidget {
    state: WidgetState,
    grid: MediaGrid,
    lightbox: Option<Lightbox>,
}

impl MediaWidget {
    pub fn new(aspect_ratio: AspectRatio) -> Self {
        Self {
            state: WidgetState::Idle,
            grid: MediaGrid::new(aspect_ratio),
            lightbox: None,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == WidgetState::Loading
    }

    pub fn error(&self) -> Option<WidgetError> {
        match self.state {
            WidgetState::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn posts(&self) -> &[MediaPost] {
        match &self.state {
            WidgetState::Loaded(posts) => posts,
            _ => &[],
        }
    }

    /// Enters `Loading`. Returns false if a load is already in flight.
    pub fn begin_load(&mut self) -> bool {
        if self.is_loading() {
            log::debug!("Reload ignored while a load is in flight");
            return false;
        }
        self.state = WidgetState::Loading;
        true
    }

    /// Replaces the current list. View state over the old list is dropped
    /// whatever the outcome.
    pub fn finish_load(&mut self, result: Result<Vec<MediaPost>, FeedError>) {
        self.grid.reset();
        self.lightbox = None;

        self.state = match result {
            Ok(posts) if posts.is_empty() => WidgetState::Error(WidgetError::NoPosts),
            Ok(posts) => WidgetState::Loaded(posts),
            Err(err) => {
                log::warn!("Error fetching posts: {}", err);
                WidgetState::Error(WidgetError::ConnectionFailed)
            }
        };
    }

    /// Runs one load cycle against `feed`. Returns false if refused
    /// because another load is in flight.
    pub async fn reload<F>(&mut self, feed: &F, query: &WidgetQuery) -> bool
    where
        F: MediaFeed + ?Sized,
    {
        if !self.begin_load() {
            return false;
        }

        let Some((db, token)) = query.credentials() else {
            self.grid.reset();
            self.lightbox = None;
            self.state = WidgetState::Error(WidgetError::MissingParameters);
            return true;
        };

        let result = feed.fetch(db, token).await;
        self.finish_load(result);
        true
    }

    pub fn grid(&self) -> &MediaGrid {
        &self.grid
    }

    pub fn cells(&self) -> Vec<GridCell<'_>> {
        self.grid.cells(self.posts())
    }

    pub fn next_carousel_image(&mut self, post_id: &str) -> Option<usize> {
        let post = self.posts().iter().find(|p| p.id == post_id)?.clone();
        Some(self.grid.next_image(&post))
    }

    pub fn previous_carousel_image(&mut self, post_id: &str) -> Option<usize> {
        let post = self.posts().iter().find(|p| p.id == post_id)?.clone();
        Some(self.grid.previous_image(&post))
    }

    /// Opens the lightbox on a post. Posts without media are not selectable.
    pub fn select(&mut self, post_id: &str) -> bool {
        let Some(post) = self
            .posts()
            .iter()
            .find(|p| p.id == post_id && p.has_media())
            .cloned()
        else {
            return false;
        };
        self.lightbox = Some(Lightbox::open(post));
        true
    }

    pub fn lightbox(&self) -> Option<&Lightbox> {
        self.lightbox.as_ref()
    }

    pub fn lightbox_mut(&mut self) -> Option<&mut Lightbox> {
        self.lightbox.as_mut()
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }

    /// Forwards a key press to the open lightbox, closing it on Escape.
    pub fn handle_key(&mut self, key: Key) -> LightboxAction {
        let action = match self.lightbox.as_mut() {
            Some(lightbox) => lightbox.handle_key(key),
            None => LightboxAction::Ignored,
        };
        if action == LightboxAction::Close {
            self.close_lightbox();
        }
        action
    }
}
