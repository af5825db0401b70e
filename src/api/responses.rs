// src/api/responses.rs
//! Wire shapes of Notion API responses.

use serde::Deserialize;

/// Generic paginated response wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub object: String,
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// Database query response
pub type QueryDatabaseResponse = PaginatedResponse<crate::model::PageRecord>;

/// Error body returned by Notion for non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionError {
    #[serde(default)]
    pub status: u16,
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub request_id: Option<String>,
}
