// src/lib.rs
//! notion-media-widget library: turns a Notion database into a media feed.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `ValidationError`
//! - **Configuration**: `ServerConfig`, `PropertyNames`, `NotionDefaults`
//! - **Domain model**: `MediaPost`, `MediaKind`, `PageRecord`
//! - **API client**: `NotionHttpClient`, `NotionRepository`
//! - **Classifier**: `MediaFetcher`, `map_page`
//! - **HTTP endpoint**: `router`, `serve`, `AppState`
//! - **Widget**: `MediaWidget`, `MediaGrid`, `Lightbox`, `HttpMediaFeed`

pub mod api;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod server;
pub mod types;
pub mod widget;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, NotionDefaults, PropertyNames, RunMode, ServerConfig};

// --- Domain Model ---
pub use crate::model::{
    DateValue, FileAttachment, MediaKind, MediaPost, PageProperties, PageRecord, PropertyValue,
    RichTextItem,
};

// --- Domain Types ---
pub use crate::types::{ApiKey, DatabaseId, ValidatedUrl};

// --- API Client ---
pub use crate::api::{ClientOptions, DatabaseQuery, NotionHttpClient, NotionRepository};

// --- Classifier ---
pub use crate::classifier::{map_page, MediaFetcher};

// --- HTTP Endpoint ---
pub use crate::server::{router, serve, AppState};

// --- Widget ---
pub use crate::widget::{
    HttpMediaFeed, Lightbox, MediaFeed, MediaGrid, MediaWidget, WidgetError, WidgetQuery,
    WidgetState,
};
