// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// How many pages the Notion API returns per query round-trip.
///
/// The Notion API maximum is 100.
pub const NOTION_API_PAGE_SIZE: u32 = 100;

/// API version pinned in the `Notion-Version` header.
pub const NOTION_API_VERSION: &str = "2022-06-28";

/// Public Notion API root. Overridable through configuration.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;

// ---------------------------------------------------------------------------
// Database schema conventions
// ---------------------------------------------------------------------------

/// Title-typed property holding the post caption.
pub const DEFAULT_TITLE_PROPERTY: &str = "Subject";

/// Date-typed property used for sorting and the displayed date.
pub const DEFAULT_PUBLISH_DATE_PROPERTY: &str = "Publish date";

/// Files-typed property holding the post media.
pub const DEFAULT_VISUALS_PROPERTY: &str = "Visuals";

// ---------------------------------------------------------------------------
// Media classification
// ---------------------------------------------------------------------------

/// Title shown when a page has no usable title.
pub const UNTITLED_POST: &str = "Untitled";

/// Extensions (case-insensitive) that make an attachment a video.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "webm", "avi"];

/// Extensions (case-insensitive) that make an attachment an image.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Flat display URL reported when a post carries no usable media.
pub const FALLBACK_COVER_URL: &str =
    "https://images.pexels.com/photos/1040880/pexels-photo-1040880.jpeg?auto=compress&cs=tinysrgb&w=800";

/// `strftime` pattern for the short date badge, e.g. "Mar 3".
pub const SHORT_DATE_FORMAT: &str = "%b %-d";

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Default database queried when a request does not name one.
pub const ENV_DATABASE_ID: &str = "NOTION_DATABASE_ID";

/// Default integration token used when a request does not carry one.
pub const ENV_INTEGRATION_TOKEN: &str = "NOTION_INTEGRATION_TOKEN";

/// Misspelled variable name read by earlier deployments.
pub const ENV_INTEGRATION_TOKEN_LEGACY: &str = "NOTION_INTEGERATION_TOKEN";

// ---------------------------------------------------------------------------
// Widget layout
// ---------------------------------------------------------------------------

/// The grid is padded with placeholder cells up to this many slots.
pub const GRID_MIN_SLOTS: usize = 12;
