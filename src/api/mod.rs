// src/api/mod.rs
//! Notion API interaction: the ability to query a database for its pages.
//!
//! I/O, parsing and pagination are kept apart so that the classifier only
//! ever sees typed [`PageRecord`]s.

pub mod client;
mod pagination;
pub mod parser;
pub mod responses;
mod types;

use crate::error::AppError;
use crate::model::PageRecord;
use crate::types::{ApiKey, DatabaseId};

pub use client::{ApiResponse, ClientOptions, NotionHttpClient};
pub use types::{DatabaseQuery, SortDirection, SortSpec};

/// The ability to read rows from a Notion database.
///
/// Business logic depends on this trait, never on HTTP details. The
/// credential travels with every call because each widget embed may carry
/// its own integration token.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// Returns every page of the database, in the order Notion sorted them.
    async fn query_database(
        &self,
        database: &DatabaseId,
        credential: &ApiKey,
        query: &DatabaseQuery,
    ) -> Result<Vec<PageRecord>, AppError>;
}
