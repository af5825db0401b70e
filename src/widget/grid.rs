//! Grid view state: per-post carousel positions and cell layout.

use crate::constants::GRID_MIN_SLOTS;
use crate::model::{MediaKind, MediaPost};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectRatio {
    /// 4:5
    #[default]
    Portrait,
    /// 1:1
    Square,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Portrait => "4:5",
            Self::Square => "1:1",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "4:5" => Ok(Self::Portrait),
            "1:1" => Ok(Self::Square),
            other => Err(format!("unsupported aspect ratio '{}'", other)),
        }
    }
}

/// Overlay icon in a cell's top-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Video,
    Carousel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell<'a> {
    Post(PostCell<'a>),
    /// Filler slot rendered with the "no camera" placeholder.
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCell<'a> {
    pub post: &'a MediaPost,
    /// URL currently shown in the cell, `None` renders a placeholder.
    pub media_url: Option<&'a str>,
    pub badge: Option<Badge>,
    pub show_play_button: bool,
    /// Carousel arrows are shown only with more than one image.
    pub show_carousel_arrows: bool,
    /// Only cells with media open the lightbox.
    pub selectable: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MediaGrid {
    aspect_ratio: AspectRatio,
    carousel_indexes: HashMap<String, usize>,
}

impl MediaGrid {
    pub fn new(aspect_ratio: AspectRatio) -> Self {
        Self {
            aspect_ratio,
            carousel_indexes: HashMap::new(),
        }
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    /// Index of the image shown for `post`, always within its image list.
    pub fn current_index(&self, post: &MediaPost) -> usize {
        let len = post.images().len();
        if len == 0 || !post.is_carousel() {
            return 0;
        }
        self.carousel_indexes.get(&post.id).copied().unwrap_or(0) % len
    }

    pub fn next_image(&mut self, post: &MediaPost) -> usize {
        self.step(post, 1)
    }

    pub fn previous_image(&mut self, post: &MediaPost) -> usize {
        let len = post.images().len();
        // Stepping back by len - 1 is one step back modulo len
        self.step(post, len.saturating_sub(1))
    }

    fn step(&mut self, post: &MediaPost, by: usize) -> usize {
        let len = post.images().len();
        if len == 0 || !post.is_carousel() {
            return 0;
        }
        let next = (self.current_index(post) + by) % len;
        self.carousel_indexes.insert(post.id.clone(), next);
        next
    }

    /// Forgets every carousel position.
    pub fn reset(&mut self) {
        self.carousel_indexes.clear();
    }

    /// Lays out `posts` in order, padded with placeholders up to the
    /// minimum slot count.
    pub fn cells<'a>(&self, posts: &'a [MediaPost]) -> Vec<GridCell<'a>> {
        let mut cells: Vec<GridCell<'a>> = posts
            .iter()
            .map(|post| GridCell::Post(self.cell(post)))
            .collect();

        let padding = GRID_MIN_SLOTS.saturating_sub(posts.len());
        cells.extend(std::iter::repeat(GridCell::Placeholder).take(padding));
        cells
    }

    fn cell<'a>(&self, post: &'a MediaPost) -> PostCell<'a> {
        let media_url = match post.kind {
            MediaKind::Video => post.video_url.as_deref(),
            MediaKind::Carousel => post
                .images()
                .get(self.current_index(post))
                .map(String::as_str),
            MediaKind::Image => post.images().first().map(String::as_str),
        };

        let badge = match post.kind {
            MediaKind::Video => Some(Badge::Video),
            MediaKind::Carousel => Some(Badge::Carousel),
            MediaKind::Image => None,
        };

        PostCell {
            post,
            media_url,
            badge,
            show_play_button: post.kind == MediaKind::Video,
            show_carousel_arrows: post.is_carousel() && post.images().len() > 1,
            selectable: post.has_media(),
        }
    }
}
